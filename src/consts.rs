/// Number of months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Month number for January
pub(crate) const JANUARY: i64 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a non-leap year before the first of each month (0-indexed by month - 1)
pub(crate) const DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

pub(crate) const DAYS_PER_YEAR: i64 = 365;
pub(crate) const DAYS_PER_4_YEARS: i64 = DAYS_PER_YEAR * 4 + 1;
pub(crate) const DAYS_PER_100_YEARS: i64 = DAYS_PER_4_YEARS * 25 - 1;
pub(crate) const DAYS_PER_400_YEARS: i64 = DAYS_PER_100_YEARS * 4 + 1;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND;

/// Days from 0001-01-01 (day zero of this crate) to 1970-01-01
pub const UNIX_EPOCH_DAYS: i64 = 719_162;

/// Characters stripped from both ends of input before parsing
pub const TRIM_CHARS: [char; 4] = [' ', '\t', '"', '\''];

/// Separates the date from the time of day (ISO 8601)
pub const TIME_DESIGNATOR: char = 'T';
