//! Query-construction rules for the card endpoints: page arithmetic, result
//! limits and optional-filter normalization.
//!
//! Kept free of any store types so the Postgres and in-memory stores (and the
//! handlers that call them) agree on exactly the same numbers.

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Fixed page size for card listing.
pub const CARD_PAGE_SIZE: i64 = 100;

/// Maximum number of cards returned by a name search.
pub const CARD_SEARCH_LIMIT: i64 = 20;

/// Page number used when none (or a non-positive one) is given.
pub const FIRST_PAGE: i64 = 1;

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// A `LIMIT`/`OFFSET` window over the store-default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Window for the 1-based card listing page `page`.
    ///
    /// Any `page <= 0` is treated as the first page.
    pub fn card_listing(page: i64) -> Self {
        let page = clamp_page(page);
        Self {
            limit: CARD_PAGE_SIZE,
            offset: (page - 1).saturating_mul(CARD_PAGE_SIZE),
        }
    }

    /// Window holding at most `limit` records from the start.
    pub fn first(limit: i64) -> Self {
        Self { limit, offset: 0 }
    }
}

/// Clamp a requested page number to the first page or later.
pub fn clamp_page(page: i64) -> i64 {
    page.max(FIRST_PAGE)
}

/// Read a raw `page` query value leniently.
///
/// Leading whitespace and an optional sign are accepted, followed by the
/// longest run of ASCII digits; trailing garbage is ignored (`"3abc"` is 3).
/// Input with no digits reads as 0, which then clamps to the first page.
/// Oversized values saturate instead of failing.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return FIRST_PAGE;
    };

    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    clamp_page(if negative { -value } else { value })
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Treat a falsy optional filter value (`?setCode=` or `?setCode=0`) as
/// absent.
pub fn optional_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != "0")
}
