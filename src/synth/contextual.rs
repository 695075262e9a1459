//! Column-name heuristics for text values.
//!
//! A text column named `customer_email` should hold something that looks like
//! an email address, `ship_city` a city, and so on. Classification is a
//! case-insensitive substring match on the column name; the first rule in
//! [`TextKind::from_column_name`] that matches wins.

use fake::faker::address::en::{CityName, CountryName, StateName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;

const PRODUCTS: &[&str] = &[
    "Laptop",
    "Smartphone",
    "Headphones",
    "Tablet",
    "Monitor",
    "Keyboard",
    "Mouse",
    "Speaker",
    "Camera",
    "Watch",
];

const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Automotive",
    "Health",
    "Beauty",
    "Food",
    "Toys",
];

const STATUSES: &[&str] = &["active", "inactive", "pending", "completed", "cancelled"];

const COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Yellow", "Orange", "Purple", "Black", "White", "Gray", "Pink",
    "Brown", "Teal", "Navy", "Maroon", "Olive", "Silver",
];

const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Analyst",
    "Designer",
    "Marketing Manager",
    "Sales Representative",
    "Customer Support",
    "Operations Manager",
    "Accountant",
    "Data Engineer",
    "HR Specialist",
    "Account Executive",
];

/// Kind of text a column name suggests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Email,
    Phone,
    Address,
    City,
    State,
    Country,
    PostalCode,
    FirstName,
    LastName,
    Username,
    Company,
    JobTitle,
    /// 5-15 word sentence
    Description,
    Url,
    Uuid,
    /// Decimal in [1.00, 999.99] rendered as text
    Price,
    Product,
    Category,
    Color,
    Status,
    /// No rule matched: one of several generic generators, picked at random
    Freeform,
}

impl TextKind {
    /// Classify a column by name
    pub fn from_column_name(column_name: &str) -> Self {
        let name = column_name.to_lowercase();
        let has = |needle: &str| name.contains(needle);

        if has("email") {
            TextKind::Email
        } else if has("phone") {
            TextKind::Phone
        } else if has("address") {
            TextKind::Address
        } else if has("city") {
            TextKind::City
        } else if has("state") {
            TextKind::State
        } else if has("country") {
            TextKind::Country
        } else if has("zip") || has("postal") {
            TextKind::PostalCode
        } else if has("first") && has("name") {
            TextKind::FirstName
        } else if has("last") && has("name") {
            TextKind::LastName
        } else if has("name") {
            // also covers "username"
            TextKind::Username
        } else if has("company") {
            TextKind::Company
        } else if has("job") || has("title") {
            TextKind::JobTitle
        } else if has("description") {
            TextKind::Description
        } else if has("url") || has("website") {
            TextKind::Url
        } else if has("uuid") || has("guid") {
            TextKind::Uuid
        } else if has("price") || has("cost") {
            TextKind::Price
        } else if has("product") {
            TextKind::Product
        } else if has("category") {
            TextKind::Category
        } else if has("color") {
            TextKind::Color
        } else if has("status") {
            TextKind::Status
        } else {
            TextKind::Freeform
        }
    }

    /// Produce an unquoted text value of this kind
    pub fn generate(&self, rng: &mut StdRng) -> String {
        match self {
            TextKind::Email => SafeEmail().fake_with_rng(rng),
            TextKind::Phone => PhoneNumber().fake_with_rng(rng),
            TextKind::Address => {
                let number: u32 = rng.random_range(1..10000);
                let street: String = StreetName().fake_with_rng(rng);
                let city: String = CityName().fake_with_rng(rng);
                let state: String = StateName().fake_with_rng(rng);
                let zip: String = ZipCode().fake_with_rng(rng);
                format!("{} {}, {}, {} {}", number, street, city, state, zip)
            }
            TextKind::City => CityName().fake_with_rng(rng),
            TextKind::State => StateName().fake_with_rng(rng),
            TextKind::Country => CountryName().fake_with_rng(rng),
            TextKind::PostalCode => ZipCode().fake_with_rng(rng),
            TextKind::FirstName => FirstName().fake_with_rng(rng),
            TextKind::LastName => LastName().fake_with_rng(rng),
            TextKind::Username => Username().fake_with_rng(rng),
            TextKind::Company => CompanyName().fake_with_rng(rng),
            TextKind::JobTitle => pick(rng, JOB_TITLES).to_string(),
            TextKind::Description => Sentence(5..16).fake_with_rng(rng),
            TextKind::Url => {
                let host: String = Word().fake_with_rng(rng);
                let path: String = Word().fake_with_rng(rng);
                format!("https://www.{}{}.com/{}", host, rng.random_range(1..1000), path)
            }
            TextKind::Uuid => uuid_v4(rng),
            TextKind::Price => {
                let cents: u32 = rng.random_range(100..=99_999);
                format!("{}.{:02}", cents / 100, cents % 100)
            }
            TextKind::Product => pick(rng, PRODUCTS).to_string(),
            TextKind::Category => pick(rng, CATEGORIES).to_string(),
            TextKind::Color => pick(rng, COLORS).to_string(),
            TextKind::Status => pick(rng, STATUSES).to_string(),
            TextKind::Freeform => freeform(rng),
        }
    }
}

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn uuid_v4(rng: &mut StdRng) -> String {
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        rng.random::<u32>(),
        rng.random::<u16>(),
        (rng.random::<u16>() & 0x0FFF) | 0x4000, // version 4
        (rng.random::<u16>() & 0x3FFF) | 0x8000, // RFC 4122 variant
        rng.random::<u64>() & 0xFFFF_FFFF_FFFF_u64
    )
}

fn freeform(rng: &mut StdRng) -> String {
    match rng.random_range(0..7) {
        0 => FirstName().fake_with_rng(rng),
        1 => LastName().fake_with_rng(rng),
        2 => CompanyName().fake_with_rng(rng),
        3 => pick(rng, JOB_TITLES).to_string(),
        4 => CityName().fake_with_rng(rng),
        5 => Word().fake_with_rng(rng),
        _ => Sentence(3..9).fake_with_rng(rng),
    }
}
