use crate::error::ToolError;
use crate::filters::compile_regex;
use crate::utils::expand_home;
use regex::Regex;
use std::path::PathBuf;

/// Which topics a command operates on.
#[derive(Debug)]
pub enum TopicSelection {
    All,
    Substring(String),
    Regex(Regex),
    /// Topics containing any of the names.
    NameList(Vec<String>),
    /// Like `NameList`, with the names read from a file, one per line.
    NameFile { path: PathBuf, names: Vec<String> },
}

/// Topic filter flags as given on the command line. At most one may be set.
#[derive(Debug, Default, Clone)]
pub struct TopicFilterOptions {
    pub regex: Option<String>,
    pub name: Option<String>,
    pub name_list: Option<String>,
    pub name_file: Option<PathBuf>,
}

impl TopicFilterOptions {
    /// No flag selects every topic. A name file is read here, so that an
    /// unusable file is reported before any connection is made.
    pub fn into_selection(self) -> Result<TopicSelection, ToolError> {
        let supplied = self.supplied_flags();
        if supplied.len() > 1 {
            return Err(ToolError::usage(format!(
                "Cannot use {} options simultaneously.",
                supplied.join(", ")
            )));
        }

        if let Some(regex) = self.regex {
            return Ok(TopicSelection::Regex(compile_regex(&regex)?));
        }
        if let Some(name) = self.name {
            return Ok(TopicSelection::Substring(name));
        }
        if let Some(name_list) = self.name_list {
            let names = split_names(name_list.split(','));
            if names.is_empty() {
                return Err(ToolError::usage("--name-list doesn't contain any names."));
            }
            return Ok(TopicSelection::NameList(names));
        }
        if let Some(name_file) = self.name_file {
            return read_name_file(name_file);
        }
        Ok(TopicSelection::All)
    }

    /// Like [`into_selection`](Self::into_selection) but exactly one flag must be set.
    pub fn into_required_selection(self) -> Result<TopicSelection, ToolError> {
        if self.supplied_flags().is_empty() {
            return Err(ToolError::usage(
                "Must provide one of the following options: \
                 --regex, --name, --name-list or --name-file.",
            ));
        }
        self.into_selection()
    }

    fn supplied_flags(&self) -> Vec<&'static str> {
        [
            (self.regex.is_some(), "--regex"),
            (self.name.is_some(), "--name"),
            (self.name_list.is_some(), "--name-list"),
            (self.name_file.is_some(), "--name-file"),
        ]
        .into_iter()
        .filter_map(|(supplied, flag)| supplied.then_some(flag))
        .collect()
    }
}

fn split_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_name_file(path: PathBuf) -> Result<TopicSelection, ToolError> {
    let path = expand_home(&path);
    let text = std::fs::read_to_string(&path).map_err(|e| {
        ToolError::usage(format!("Cannot read name file {}: {e}", path.display()))
    })?;
    let names = split_names(text.lines());
    if names.is_empty() {
        return Err(ToolError::usage(format!(
            "{} doesn't contain any names.",
            path.display()
        )));
    }
    Ok(TopicSelection::NameFile { path, names })
}

impl TopicSelection {
    /// Matching topics, sorted and without duplicates.
    pub fn select(&self, topics: &[String]) -> Vec<String> {
        let mut selected = topics
            .iter()
            .filter(|topic| self.matches(topic))
            .cloned()
            .collect::<Vec<_>>();
        selected.sort();
        selected.dedup();
        selected
    }

    fn matches(&self, topic: &str) -> bool {
        match self {
            TopicSelection::All => true,
            TopicSelection::Substring(name) => topic.contains(name.as_str()),
            TopicSelection::Regex(regex) => regex.is_match(topic),
            TopicSelection::NameList(names) | TopicSelection::NameFile { names, .. } => {
                names.iter().any(|name| topic.contains(name.as_str()))
            }
        }
    }
}
