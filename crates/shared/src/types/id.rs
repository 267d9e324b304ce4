//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `PayableId` where a
//! `ReceivableId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(TenantId, "Unique identifier for a tenant (barbershop unit).");
typed_id!(StaffId, "Unique identifier for a staff member.");
typed_id!(PayableId, "Unique identifier for an account payable.");
typed_id!(ReceivableId, "Unique identifier for an account receivable.");
typed_id!(SettlementId, "Unique identifier for a bank settlement.");
typed_id!(RevenueId, "Unique identifier for a revenue record.");
typed_id!(SessionId, "Unique identifier for a cash-register session.");
typed_id!(OperationId, "Unique identifier for a cash operation.");
typed_id!(RunId, "Unique identifier for a reconciliation run.");
