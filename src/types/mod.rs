//! Value types shared by the sampler and its collaborators.

pub mod measurement;
