use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Owner {
    #[serde(rename = "login")]
    pub login: String,
}
