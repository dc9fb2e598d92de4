//! Domain Layer - peer identity values and the XOR metric over them.

mod entities;
mod errors;
mod identity;
pub mod services;
mod value_objects;

pub use entities::LocalIdentity;
pub use errors::PeerIdentityError;
pub use identity::PeerId;
pub use services::{
    bucket_for_peer, calculate_bucket_index, compare_distance, prefix_len, xor_bytes,
    xor_distance,
};
pub use value_objects::Distance;
