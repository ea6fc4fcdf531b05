// Application layer: the collaborators that drive the composer.

pub mod picker;
pub mod submission;
