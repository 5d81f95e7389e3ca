#[cfg(feature = "core")]
#[doc(inline)]
pub use metaseq_core as core;

#[cfg(feature = "variant")]
#[doc(inline)]
pub use metaseq_variant as variant;

#[cfg(feature = "vrs")]
#[doc(inline)]
pub use metaseq_vrs as vrs;

#[cfg(feature = "identity")]
#[doc(inline)]
pub use metaseq_identity as identity;

#[cfg(feature = "consequence")]
#[doc(inline)]
pub use metaseq_consequence as consequence;
