use crate::models::TopicPartition;
use anyhow::{bail, Context};
use bytes::Buf;

/// Decodes a member assignment as sent by the `consumer` group protocol
/// (version, topic partitions, user data).
pub fn decode_member_assignment(mut data: &[u8]) -> Result<Vec<TopicPartition>, anyhow::Error> {
    if data.is_empty() {
        return Ok(vec![]);
    }

    let version = read_i16(&mut data).context("While reading assignment version")?;
    if version < 0 {
        bail!("Unsupported assignment version {version}")
    }

    let topics_count = read_i32(&mut data).context("While reading topics count")?;
    let mut assignment = vec![];
    for _ in 0..topics_count.max(0) {
        let topic = read_string(&mut data).context("While reading topic name")?;
        let partitions_count = read_i32(&mut data).context("While reading partitions count")?;
        for _ in 0..partitions_count.max(0) {
            let partition = read_i32(&mut data).context("While reading partition")?;
            assignment.push(TopicPartition {
                topic: topic.clone(),
                partition,
            });
        }
    }

    Ok(assignment)
}

fn read_i16(data: &mut &[u8]) -> Result<i16, anyhow::Error> {
    if data.remaining() < 2 {
        bail!("Unexpected end of assignment")
    }
    Ok(data.get_i16())
}

fn read_i32(data: &mut &[u8]) -> Result<i32, anyhow::Error> {
    if data.remaining() < 4 {
        bail!("Unexpected end of assignment")
    }
    Ok(data.get_i32())
}

fn read_string(data: &mut &[u8]) -> Result<String, anyhow::Error> {
    let length = read_i16(data)?;
    if length < 0 {
        return Ok(String::new());
    }
    let length = length as usize;
    if data.remaining() < length {
        bail!("Unexpected end of assignment")
    }
    let value = String::from_utf8(data[..length].to_vec()).context("Topic name is not utf-8")?;
    data.advance(length);
    Ok(value)
}
