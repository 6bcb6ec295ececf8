//! Session item parser
//!
//! Topic items are written `yymmdd - title`, e.g. `250820 - 跨部門溝通成本`.
//!
//! ```text
//! item  := date ws* '-' ws* title
//! date  := yy mm dd          (two ASCII digits each, century 2000)
//! title := any non-empty text
//! ```

use chrono::NaiveDate;
use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::space0,
    combinator::{map_res, rest},
    sequence::{delimited, tuple},
    IResult,
};
use serde::Serialize;

use crate::error::{TandemError, TandemResult};

/// A dated dialogue session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub date: NaiveDate,
    pub title: String,
}

/// Parse one `yymmdd - title` item
pub fn parse_session(input: &str) -> TandemResult<Session> {
    let invalid = |reason: String| TandemError::InvalidSession {
        item: input.to_string(),
        reason,
    };

    let (_, ((yy, mm, dd), title)) =
        parse_item(input.trim()).map_err(|e| invalid(format!("Parse error: {:?}", e)))?;

    let title = title.trim();
    if title.is_empty() {
        return Err(invalid("missing title".to_string()));
    }

    let date = NaiveDate::from_ymd_opt(2000 + yy as i32, mm, dd)
        .ok_or_else(|| invalid(format!("no such date 20{:02}-{:02}-{:02}", yy, mm, dd)))?;

    Ok(Session {
        date,
        title: title.to_string(),
    })
}

fn parse_item(input: &str) -> IResult<&str, ((u32, u32, u32), &str)> {
    let (input, date) = tuple((two_digits, two_digits, two_digits))(input)?;
    let (input, _) = delimited(space0, tag("-"), space0)(input)?;
    let (input, title) = rest(input)?;
    Ok((input, (date, title)))
}

fn two_digits(input: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), |s: &str| {
        s.parse::<u32>()
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let session = parse_session("250820 - 跨部門溝通成本與共享式領導盤點").unwrap();
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
        assert_eq!(session.title, "跨部門溝通成本與共享式領導盤點");
    }

    #[test]
    fn test_parse_without_spaces() {
        let session = parse_session("251205-商業創新理論").unwrap();
        assert_eq!(session.date.to_string(), "2025-12-05");
        assert_eq!(session.title, "商業創新理論");
    }

    #[test]
    fn test_rejects_bad_dates() {
        let err = parse_session("251340 - 不存在的日子").unwrap_err();
        assert!(err.to_string().contains("no such date"));
    }

    #[test]
    fn test_rejects_missing_title() {
        assert!(matches!(
            parse_session("250801 -   "),
            Err(TandemError::InvalidSession { .. })
        ));
    }

    #[test]
    fn test_rejects_short_date() {
        assert!(parse_session("2508 - 太短").is_err());
        assert!(parse_session("no date here").is_err());
    }
}
