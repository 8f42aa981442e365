use kafka_tools::bulk::BulkOutcome;
use kafka_tools::models::{BrokerConfigEntry, ConsumerGroupDescription};
use kafka_tools::queries::list_consumers::{ConsumerSummary, ListConsumersResponse};
use std::io::Write;

pub fn topic_list(out: &mut dyn Write, topics: &[String]) -> std::io::Result<()> {
    for topic in topics {
        writeln!(out, "{topic}")?;
    }
    Ok(())
}

/// Group ids padded to the longest one, followed by the state.
pub fn consumer_table(
    out: &mut dyn Write,
    response: &ListConsumersResponse,
) -> std::io::Result<()> {
    let width = response.name_width();
    for group in &response.groups {
        writeln!(out, "{:<width$}  {}", group.group_id(), group.state())?;
    }
    Ok(())
}

pub fn consumer_summary(out: &mut dyn Write, summary: &ConsumerSummary) -> std::io::Result<()> {
    writeln!(out, "Found {} consumers", summary.total())?;
    writeln!(out, "{} active, {} inactive", summary.active, summary.inactive)
}

pub fn consumer_descriptions(descriptions: &[ConsumerGroupDescription]) -> String {
    let mut rendered = String::new();
    for description in descriptions {
        rendered.push_str(&description.group_id);
        rendered.push_str("\nTopics:\n");
        for topic in description.assigned_topics() {
            rendered.push_str(topic);
            rendered.push('\n');
        }
        rendered.push('\n');
    }
    rendered
}

fn value_or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

pub fn broker_configs(broker_id: i32, entries: &[BrokerConfigEntry]) -> String {
    let mut rendered = format!("All configs for broker {broker_id} are:\n");
    for entry in entries {
        let synonyms = entry
            .synonyms
            .iter()
            .map(|synonym| {
                format!(
                    "{}:{}={}",
                    synonym.source,
                    synonym.name,
                    value_or_null(&synonym.value)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        rendered.push_str(&format!(
            "  {}={} sensitive={} synonyms={{{synonyms}}}\n",
            entry.name,
            value_or_null(&entry.value),
            entry.is_sensitive
        ));
    }
    rendered
}

/// `kind` is the plural noun, `topics` or `consumers`.
pub fn deletion_summary(
    out: &mut dyn Write,
    kind: &str,
    outcome: &BulkOutcome,
) -> std::io::Result<()> {
    writeln!(out, "Found {} {kind} to delete", outcome.total())?;
    writeln!(
        out,
        "{} deleted successfully, {} not successfully deleted",
        outcome.completed.len(),
        outcome.not_completed.len()
    )
}

pub fn modification_summary(out: &mut dyn Write, outcome: &BulkOutcome) -> std::io::Result<()> {
    writeln!(out, "Found {} topics to modify", outcome.total())?;
    writeln!(
        out,
        "{} modified successfully, {} not successfully modified",
        outcome.completed.len(),
        outcome.not_completed.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kafka_tools::bulk::FailedOperation;
    use kafka_tools::mocks::fixture_broker_config;
    use kafka_tools::models::{ConsumerGroupListing, ConsumerGroupState};

    fn render(print: impl FnOnce(&mut dyn Write) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_pads_to_longest_name() {
        let response = ListConsumersResponse {
            groups: vec![
                ConsumerGroupListing::new("a", ConsumerGroupState::Stable),
                ConsumerGroupListing::new("abcd", ConsumerGroupState::Empty),
            ],
        };

        let rendered = render(|out| consumer_table(out, &response));

        assert_eq!(rendered, "a     STABLE\nabcd  EMPTY\n");
    }

    #[test]
    fn deletion_counts() {
        let outcome = BulkOutcome {
            completed: vec!["a".to_owned()],
            not_completed: vec![FailedOperation {
                name: "b".to_owned(),
                reason: "timed out".to_owned(),
            }],
        };

        let rendered = render(|out| deletion_summary(out, "topics", &outcome));

        assert_eq!(
            rendered,
            "Found 2 topics to delete\n1 deleted successfully, 1 not successfully deleted\n"
        );
    }

    #[test]
    fn broker_config_lines() {
        let mut entries = fixture_broker_config();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries[0].value = None;

        let rendered = broker_configs(2, &entries);

        assert_eq!(
            rendered,
            "All configs for broker 2 are:\n\
             \x20 group.min.session.timeout.ms=null sensitive=false \
             synonyms={DEFAULT_CONFIG:group.min.session.timeout.ms=60000}\n\
             \x20 log.message.timestamp.type=LogAppendTime sensitive=false \
             synonyms={DEFAULT_CONFIG:log.message.timestamp.type=CreateTime}\n"
        );
    }
}
