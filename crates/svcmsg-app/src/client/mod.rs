mod trigger;

pub use trigger::{ClientTrigger, LiffSession, TriggerOutcome};
