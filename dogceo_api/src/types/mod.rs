mod envelope;
pub use self::envelope::ApiEnvelope;
