use std::{fmt, str::FromStr};

use shared::error::AppError;
use uuid::Uuid;

macro_rules! define_uuid_id {
    ($id_type:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $id_type(Uuid);

        impl $id_type {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            pub fn raw(self) -> Uuid {
                self.0
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $id_type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $id_type {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| AppError::ConversionEntityError(e.to_string()))
            }
        }
    };
}

define_uuid_id!(UserId);
define_uuid_id!(AnnouncementId);

/// Ticket identifier in the form `T<year>-<MM>-<NNN>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(String);

impl TicketId {
    pub fn compose(year: i32, month: u32, sequence: usize) -> Self {
        Self(format!("T{year}-{month:02}-{sequence:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TicketId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::BadRequest(format!("invalid ticket id: {s}"));
        let rest = s.strip_prefix('T').ok_or_else(invalid)?;
        let mut parts = rest.split('-');
        let (Some(year), Some(month), Some(seq), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let well_formed = year.len() == 4
            && month.len() == 2
            && seq.len() >= 3
            && [year, month, seq]
                .iter()
                .all(|p| p.chars().all(|c| c.is_ascii_digit()));
        if !well_formed {
            return Err(invalid());
        }
        Ok(Self(s.to_string()))
    }
}
