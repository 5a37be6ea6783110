use super::frontier::RemovalPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
        }
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        match self {
            Strategy::BreadthFirst => RemovalPolicy::Fifo,
            Strategy::DepthFirst => RemovalPolicy::Lifo,
        }
    }
}

impl From<&str> for Strategy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dfs" => Strategy::DepthFirst,
            _ => Strategy::BreadthFirst,
        }
    }
}

impl From<String> for Strategy {
    fn from(s: String) -> Self {
        Strategy::from(s.as_str())
    }
}
