use rand::seq::SliceRandom;
use rand::RngCore;

pub static NAMES: [&str; 12] = [
    "Lex", "Ram", "Car", "Dig", "Red", "Bin", "Ana", "Lib", "Sis", "Net", "Led", "Bus",
];

pub fn random_name(rng: &mut dyn RngCore) -> &'static str {
    NAMES.choose(rng).copied().unwrap_or(NAMES[0])
}

/// Second word of a full name, or the whole name for founders.
pub fn last_name(name: &str) -> &str {
    name.split(' ').nth(1).unwrap_or(name)
}

// dad's last name, with mom's tacked on in lower case when it is short
pub fn family_name(mom: &str, dad: &str) -> String {
    let mom_last = last_name(mom);
    let dad_last = last_name(dad);

    if mom_last.chars().count() > 3 {
        return dad_last.to_string();
    }

    format!("{}{}", dad_last, mom_last.to_lowercase())
}
