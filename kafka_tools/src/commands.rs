pub mod delete_consumers;
pub mod delete_topics;
pub mod set_partitions;
