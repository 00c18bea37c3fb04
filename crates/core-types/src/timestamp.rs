use core::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use lightlink_proto::{Error as ProtoError, Protobuf};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A point in time, carried on the wire as a `google.protobuf.Timestamp`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self(OffsetDateTime::UNIX_EPOCH);

    pub const fn new(time: OffsetDateTime) -> Self {
        Self(time)
    }

    pub fn from_unix_timestamp(seconds: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(seconds).ok().map(Self)
    }

    pub const fn inner(&self) -> OffsetDateTime {
        self.0
    }

    /// Whole seconds since the Unix epoch.
    pub const fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Sub-second nanoseconds, always in `0..1_000_000_000`.
    pub const fn subsec_nanos(&self) -> i32 {
        self.0.nanosecond() as i32
    }
}

impl fmt::Display for Timestamp {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Timestamp {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl From<Timestamp> for prost_types::Timestamp {
    fn from(ts: Timestamp) -> Self {
        Self {
            seconds: ts.unix_timestamp(),
            nanos: ts.subsec_nanos(),
        }
    }
}

impl Protobuf for Timestamp {
    type Proto = prost_types::Timestamp;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let total_nanos = proto.seconds as i128 * NANOS_PER_SECOND + proto.nanos as i128;

        let time = OffsetDateTime::from_unix_timestamp_nanos(total_nanos).map_err(|_| {
            ProtoError::unsupported_value::<Self::Proto>(format!(
                "timestamp out of range: {}s {}ns",
                proto.seconds, proto.nanos
            ))
        })?;

        Ok(Self(time))
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok((*self).into())
    }
}
