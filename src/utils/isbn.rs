use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

lazy_static! {
    // three digits, hyphen, ten digits, e.g. 123-4567890123
    static ref ISBN_PATTERN: Regex = Regex::new(r"^\d{3}-\d{10}$").expect("valid isbn pattern");
}

pub fn validate_isbn(isbn: &str) -> bool {
    ISBN_PATTERN.is_match(isbn)
}

pub fn random_isbn() -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{}", rng.gen_range(100..=999), rng.gen_range(1_000_000_000u64..=9_999_999_999))
}
