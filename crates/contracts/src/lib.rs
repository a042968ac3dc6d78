//! DTOs shared between the FixIt frontend and the API it talks to.

pub mod system;
