//! Drill item generators.
//!
//! Each category produces one `DrillItem`: the text shown to the learner and
//! the SSML sent to the synthesis service. Generators draw from an explicit
//! `Rng` handle so a fixed seed reproduces a whole session.

use rand::Rng;

use crate::error::DrillError;

/// One generated practice unit: readable form plus speech-markup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillItem {
    pub text: String,
    pub markup: String,
}

/// The kind of content to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Phone,
    Name,
    Number,
    Date,
}

impl Category {
    /// Resolve a category name. Case-insensitive, surrounding whitespace
    /// ignored. Unknown names are fatal at startup.
    pub fn resolve(name: &str) -> Result<Self, DrillError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "name" => Ok(Self::Name),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            other => Err(DrillError::UnknownCategory(other.to_string())),
        }
    }

    /// Produce one drill item for this category.
    ///
    /// `slow` is accepted by every generator but currently never consulted;
    /// it is kept in the signature until the speech-rate question is settled.
    pub fn generate<R: Rng>(self, slow: bool, rng: &mut R) -> DrillItem {
        match self {
            Self::Phone => phone_item(slow, rng),
            Self::Name => name_item(slow, rng),
            Self::Number => number_item(slow, rng),
            Self::Date => date_item(slow, rng),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// US-style phone patterns, `#` filled with a random digit.
const PHONE_FORMATS: [&str; 6] = [
    "###-###-####",
    "(###) ###-####",
    "(###)###-####",
    "+1-###-###-####",
    "###.###.####",
    "001-###-###-####",
];

/// Common English surnames for the spelling drill.
const SURNAMES: [&str; 48] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis",
    "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin",
    "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson",
    "Walker", "Young", "Allen", "King", "Wright", "Scott", "Green", "Baker",
    "Adams", "Nelson", "Hill", "Campbell", "Mitchell", "Roberts", "Carter",
    "Phillips", "Evans", "Turner", "Parker", "Collins", "Edwards", "Stewart",
    "Morris", "Murphy", "Cook", "Rogers", "Bell",
];

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];

fn phone_item<R: Rng>(_slow: bool, rng: &mut R) -> DrillItem {
    let pattern = PHONE_FORMATS[rng.gen_range(0..PHONE_FORMATS.len())];
    let number = fill_digits(pattern, rng);
    DrillItem {
        markup: format!("<speak><say-as interpret-as='telephone'>{number}</say-as></speak>"),
        text: number,
    }
}

fn name_item<R: Rng>(_slow: bool, rng: &mut R) -> DrillItem {
    let surname = SURNAMES[rng.gen_range(0..SURNAMES.len())];
    // Speak the name once, then spell it letter by letter.
    let spelled: Vec<String> = surname.chars().map(String::from).collect();
    let spelled = spelled.join("<break/>");
    DrillItem {
        text: surname.to_string(),
        markup: format!("<speak>{surname}, {spelled}</speak>"),
    }
}

fn number_item<R: Rng>(_slow: bool, rng: &mut R) -> DrillItem {
    let number = random_number(rng, 3).to_string();
    DrillItem {
        markup: format!("<speak><say-as interpret-as='cardinal'>{number}</say-as></speak>"),
        text: number,
    }
}

fn date_item<R: Rng>(_slow: bool, rng: &mut R) -> DrillItem {
    let day: u32 = rng.gen_range(1..=30);
    let month: usize = rng.gen_range(1..=12);
    let year: u32 = rng.gen_range(1980..=2021);
    // Day is deliberately not validated against the month: February 30th is a
    // legitimate drill here.
    let suffix = ordinal_suffix(day);
    DrillItem {
        text: format!("the {day}{suffix} of {}, {year}", MONTHS[month - 1]),
        markup: format!(
            r#"<say-as interpret-as="date" format="dmy">{day}-{month}-{year}</say-as>"#
        ),
    }
}

/// 1→st, 2→nd, 3→rd, everything else→th. No 11/12/13 special cases.
fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Uniform random integer with exactly `length` digits, length >= 1.
pub(crate) fn random_number<R: Rng>(rng: &mut R, length: u32) -> u64 {
    let lo = 10u64.pow(length - 1);
    let hi = 10u64.pow(length);
    rng.gen_range(lo..hi)
}

fn fill_digits<R: Rng>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| {
            if c == '#' {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}
