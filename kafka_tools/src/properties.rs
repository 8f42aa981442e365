//! Reading and writing of Java `.properties` files, the format the site
//! credential files are kept in.

use anyhow::Context;
use chrono::Utc;
use java_properties::{PropertiesIter, PropertiesWriter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Ordered key/value pairs. Setting an existing key replaces its value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads ISO-8859-1 encoded properties, keeping the order of first appearance.
    pub fn read(reader: impl Read) -> Result<Self, anyhow::Error> {
        let mut properties = Properties::new();
        PropertiesIter::new(reader)
            .read_into(|key, value| properties.set(key, value))
            .context("While parsing properties")?;
        Ok(properties)
    }

    pub fn parse(text: &str) -> Result<Self, anyhow::Error> {
        Self::read(text.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let file = File::open(path)
            .with_context(|| format!("While reading properties file {}", path.display()))?;
        Self::read(BufReader::new(file))
            .with_context(|| format!("While parsing properties file {}", path.display()))
    }

    /// Renders the properties with a leading timestamp comment.
    pub fn store(&self) -> Result<Vec<u8>, anyhow::Error> {
        let mut buffer = Vec::new();
        let mut writer = PropertiesWriter::new(&mut buffer);
        writer
            .write_comment(&Utc::now().format("%a %b %d %H:%M:%S UTC %Y").to_string())
            .context("While writing properties header")?;
        for (key, value) in &self.entries {
            writer
                .write(key, value)
                .with_context(|| format!("While writing property {key}"))?;
        }
        writer.finish().context("While writing properties")?;
        Ok(buffer)
    }
}
