use serde::{Deserialize, Serialize};

// Configuration abstracts config options for one library session
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: String,
    pub book_loan_days: i64,
    pub daily_late_fee: i64,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: data_file.to_string(),
            book_loan_days: 15,
            daily_late_fee: 1,
        }
    }
}
