//! Date-of-birth derivation from a D/M/Y string plus a stated age.

use chrono::NaiveDate;

use crate::Cleaned;

/// Derives a date of birth from a `D/M/Y` string and the age at last birthday.
///
/// The source dates carry a two-digit year, so the century is inferred as
/// `current_year - age` and the year token in the string is ignored. The
/// inference is off by one for anyone whose birthday falls between the data
/// capture date and year end; that ambiguity is inherent to the source data
/// and accepted as-is rather than corrected.
///
/// Day and month are taken at face value (UK order, no leading zeros
/// assumed). Any parse or construction failure maps to absent.
pub fn derive_date_of_birth(
    dob: Option<&str>,
    age_last_birthday: Option<&str>,
    current_year: i32,
) -> Cleaned<NaiveDate> {
    let (Some(dob), Some(age)) = (dob, age_last_birthday) else {
        return Cleaned::blank();
    };
    let dob = dob.trim();
    let age = age.trim();
    if dob.is_empty() || age.is_empty() {
        return Cleaned::blank();
    }

    let mut parts = dob.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Cleaned::malformed();
    };
    // The year token's value is unused (the century comes from the age), but
    // a non-numeric one still means the date as a whole is malformed.
    let (Ok(day), Ok(month), Ok(_)) = (
        day.trim().parse::<u32>(),
        month.trim().parse::<u32>(),
        year.trim().parse::<u32>(),
    ) else {
        return Cleaned::malformed();
    };
    let Ok(age) = age.parse::<i32>() else {
        return Cleaned::malformed();
    };

    let full_year = current_year - age;
    match NaiveDate::from_ymd_opt(full_year, month, day) {
        Some(date) => Cleaned::Value(date),
        None => Cleaned::malformed(),
    }
}
