use crate::engine::social::StatusUpdate;
use rand::Rng;
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct StatusUpdateFactory {
    params: HashMap<String, Value>,
}

impl StatusUpdateFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("author".into(), json!("alice"));
        params.insert("text".into(), json!("hello"));
        params.insert("date".into(), json!(1_700_000_000_000u64));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> StatusUpdate {
        StatusUpdate {
            author: self.params["author"].as_str().unwrap().to_string(),
            text: self.params["text"].as_str().unwrap().to_string(),
            date: self.params["date"].as_u64().unwrap(),
        }
    }

    /// Builds `count` updates with strictly increasing dates starting at `date`.
    pub fn create_list(self, count: usize) -> Vec<StatusUpdate> {
        let mut rng = rand::thread_rng();
        let author = self.params["author"].as_str().unwrap().to_string();
        let text = self.params["text"].as_str().unwrap().to_string();
        let mut date = self.params["date"].as_u64().unwrap();

        (0..count)
            .map(|i| {
                let update = StatusUpdate::new(author.clone(), format!("{} #{}", text, i), date);
                date += rng.gen_range(1..60_000);
                update
            })
            .collect()
    }
}
