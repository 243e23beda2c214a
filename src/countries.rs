use crate::models::Country;

const fn country(
    name: &'static str,
    code: &'static str,
    emoji: &'static str,
    continent: &'static str,
    currency: &'static str,
    phone_prefix: &'static str,
) -> Country {
    Country {
        name,
        code,
        emoji,
        continent,
        currency,
        phone_prefix,
    }
}

/// Countries a listing can be posted in
pub static COUNTRIES: [Country; 11] = [
    country("Pakistan", "PK", "🇵🇰", "Asia", "PKR", "+92"),
    country("United Arab Emirates", "AE", "🇦🇪", "Asia", "AED", "+971"),
    country("United Kingdom", "GB", "🇬🇧", "Europe", "GBP", "+44"),
    country("United States", "US", "🇺🇸", "North America", "USD", "+1"),
    country("Saudi Arabia", "SA", "🇸🇦", "Asia", "SAR", "+966"),
    country("India", "IN", "🇮🇳", "Asia", "INR", "+91"),
    country("Canada", "CA", "🇨🇦", "North America", "CAD", "+1"),
    country("Australia", "AU", "🇦🇺", "Oceania", "AUD", "+61"),
    country("Turkey", "TR", "🇹🇷", "Asia/Europe", "TRY", "+90"),
    country("Germany", "DE", "🇩🇪", "Europe", "EUR", "+49"),
    country("France", "FR", "🇫🇷", "Europe", "EUR", "+33"),
];

/// Country preselected on a new listing
pub fn default_country() -> &'static Country {
    &COUNTRIES[0]
}

pub fn find_by_name(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name == name)
}

pub fn find_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}
