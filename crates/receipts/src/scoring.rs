//! Points rules for receipts.
//!
//! Parsing happens in a fixed order (total, date, time, then item prices on
//! demand) and the first failure aborts scoring. There is no partial score.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use thiserror::Error;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::receipt::Receipt;

const ROUND_DOLLAR_POINTS: i64 = 50;
const QUARTER_MULTIPLE_POINTS: i64 = 25;
const POINTS_PER_ITEM_PAIR: i64 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;

/// Why a receipt could not be scored.
///
/// The messages are returned to clients as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Failed to parse receipt total to float.")]
    InvalidTotal,

    #[error("Failed to parse receipt purchaseDate.")]
    InvalidDate,

    #[error("Failed to parse receipt purchaseTime.")]
    InvalidTime,

    /// Carries the item's description exactly as submitted.
    #[error("Failed to parse price to float for item: {0}")]
    InvalidItemPrice(String),
}

/// Points earned by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: i64,
    pub round_dollar: i64,
    pub quarter_multiple: i64,
    pub item_pairs: i64,
    pub item_descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    /// Saturates at `i64::MAX` rather than overflowing.
    pub fn total(&self) -> i64 {
        [
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(self.retailer, i64::saturating_add)
    }
}

/// Score a receipt.
pub fn score(receipt: &Receipt) -> Result<i64, ScoreError> {
    score_breakdown(receipt).map(|b| b.total())
}

/// Score a receipt, keeping each rule's contribution separate.
pub fn score_breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ScoreError> {
    let total = parse_amount(&receipt.total).ok_or(ScoreError::InvalidTotal)?;
    let date = parse_purchase_date(&receipt.purchase_date)?;
    let time = parse_purchase_time(&receipt.purchase_time)?;

    Ok(PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: if total.floor() == total { ROUND_DOLLAR_POINTS } else { 0 },
        quarter_multiple: if total % 0.25 == 0.0 { QUARTER_MULTIPLE_POINTS } else { 0 },
        item_pairs: POINTS_PER_ITEM_PAIR * (receipt.items.len() / 2) as i64,
        item_descriptions: description_points(receipt)?,
        odd_day: if date.day() % 2 != 0 { ODD_DAY_POINTS } else { 0 },
        afternoon: if is_afternoon(time) { AFTERNOON_POINTS } else { 0 },
    })
}

fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|c| is_letter_or_digit(*c)).count() as i64
}

/// Any letter category, or a decimal digit. Other numerals (`½`, `²`, `Ⅻ`)
/// and combining marks do not count.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Only items whose trimmed description length is a multiple of three have
/// their price parsed.
fn description_points(receipt: &Receipt) -> Result<i64, ScoreError> {
    let mut points = 0;
    for item in &receipt.items {
        if item.description.trim().chars().count() % 3 != 0 {
            continue;
        }
        let price = parse_amount(&item.price)
            .ok_or_else(|| ScoreError::InvalidItemPrice(item.description.clone()))?;
        // The cast saturates for huge prices; so does the sum.
        points = i64::saturating_add(points, (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as i64);
    }
    Ok(points)
}

// 14:00 itself does not count; neither does 16:00.
fn is_afternoon(time: NaiveTime) -> bool {
    let (hour, minute) = (time.hour(), time.minute());
    (hour == 14 && minute > 0) || (hour > 14 && hour < 16)
}

fn parse_amount(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// `YYYY-MM-DD`, zero padded, and a real calendar day.
fn parse_purchase_date(s: &str) -> Result<NaiveDate, ScoreError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(ScoreError::InvalidDate);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ScoreError::InvalidDate)
}

/// `HH:MM` on a 24-hour clock. The hour may drop its leading zero; the minute
/// may not.
fn parse_purchase_time(s: &str) -> Result<NaiveTime, ScoreError> {
    let (hour, minute) = s.split_once(':').ok_or(ScoreError::InvalidTime)?;
    if !is_digits(hour, 1..=2) || !is_digits(minute, 2..=2) {
        return Err(ScoreError::InvalidTime);
    }
    let hour: u32 = hour.parse().map_err(|_| ScoreError::InvalidTime)?;
    let minute: u32 = minute.parse().map_err(|_| ScoreError::InvalidTime)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ScoreError::InvalidTime)
}

fn is_digits(s: &str, len: core::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
