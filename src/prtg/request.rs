use std::fmt;
use std::fmt::{Debug, Formatter};

#[derive(Clone, PartialEq)]
pub struct PrtgRequest {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

impl PrtgRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

// apitoken stays out of logs and assertion output
impl Debug for PrtgRequest {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(key, value)| {
                if *key == "apitoken" {
                    (*key, "***")
                } else {
                    (*key, value.as_str())
                }
            })
            .collect();
        f.debug_struct("PrtgRequest")
            .field("url", &self.url)
            .field("params", &params)
            .finish()
    }
}
