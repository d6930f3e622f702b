// Mock collaborators shared by the integration tests

pub mod output;

pub use output::MockOutput;
