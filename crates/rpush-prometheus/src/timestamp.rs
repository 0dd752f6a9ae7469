use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::error::RenderError;

/// Zone used for snapshot times that carry no UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    /// Zone of the host, falling back to UTC when it cannot be determined.
    #[default]
    System,
    Fixed(UtcOffset),
}

impl LocalZone {
    fn offset_for(&self, naive: PrimitiveDateTime) -> UtcOffset {
        match self {
            LocalZone::Fixed(offset) => *offset,
            LocalZone::System => {
                let guess = UtcOffset::local_offset_at(naive.assume_utc()).unwrap_or(UtcOffset::UTC);
                // second lookup at the corrected instant picks the right side of a DST switch
                UtcOffset::local_offset_at(naive.assume_offset(guess)).unwrap_or(guess)
            }
        }
    }
}

/// Convert a restic snapshot time to whole Unix epoch seconds.
///
/// Everything from the first `.` onward is dropped, which removes the fractional seconds together with any offset written after them.
/// The remainder is read as local time in `zone`, unless it still ends with an explicit offset (`Z`, `+01:00`).
pub fn epoch_seconds(raw: &str, zone: LocalZone) -> Result<i64, RenderError> {
    let whole = raw.split_once('.').map_or(raw, |(head, _)| head).trim();

    if let Ok(dt) = OffsetDateTime::parse(whole, &Rfc3339) {
        return Ok(dt.unix_timestamp());
    }

    let naive = parse_naive(whole).ok_or_else(|| RenderError::InvalidTime(raw.to_string()))?;
    Ok(naive.assume_offset(zone.offset_for(naive)).unix_timestamp())
}

fn parse_naive(s: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        s,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
    })
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::offset;

    const UTC: LocalZone = LocalZone::Fixed(UtcOffset::UTC);

    #[test]
    fn naive_time_in_fixed_zone() {
        assert_eq!(epoch_seconds("2024-03-01T10:15:30", UTC).unwrap(), 1_709_288_130);
        assert_eq!(
            epoch_seconds("2024-03-01T10:15:30", LocalZone::Fixed(offset!(+1))).unwrap(),
            1_709_284_530
        );
    }

    #[test]
    fn fraction_is_truncated_not_rounded() {
        assert_eq!(
            epoch_seconds("2024-03-01T10:15:30.123456", UTC).unwrap(),
            1_709_288_130
        );
        assert_eq!(
            epoch_seconds("2024-03-01T10:15:30.999999999", UTC).unwrap(),
            1_709_288_130
        );
    }

    #[test]
    fn offset_after_fraction_is_discarded() {
        let zone = LocalZone::Fixed(offset!(-5));
        assert_eq!(
            epoch_seconds("2024-03-01T10:15:30.123456789+01:00", zone).unwrap(),
            epoch_seconds("2024-03-01T10:15:30", zone).unwrap()
        );
    }

    #[test]
    fn explicit_offset_without_fraction_is_honoured() {
        let zone = LocalZone::Fixed(offset!(-5));
        assert_eq!(
            epoch_seconds("2024-03-01T10:15:30+01:00", zone).unwrap(),
            1_709_284_530
        );
        assert_eq!(epoch_seconds("2024-03-01T10:15:30Z", zone).unwrap(), 1_709_288_130);
    }

    #[test]
    fn space_separator_is_accepted() {
        assert_eq!(epoch_seconds("2024-03-01 10:15:30.5", UTC).unwrap(), 1_709_288_130);
    }

    #[test]
    fn system_zone_truncates_like_fixed_zone() {
        let zone = LocalZone::System;
        assert_eq!(
            epoch_seconds("2024-03-01T10:15:30.123456", zone).unwrap(),
            epoch_seconds("2024-03-01T10:15:30", zone).unwrap()
        );
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["", "yesterday", "2024-03-01", "2024-13-01T00:00:00"] {
            assert_eq!(
                epoch_seconds(raw, UTC),
                Err(RenderError::InvalidTime(raw.to_string())),
                "{raw}"
            );
        }
    }
}
