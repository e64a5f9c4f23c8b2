use std::borrow::Cow;

/// The surface shared by every record that can be "done".
///
/// Tasks and issues carry very different extra fields; anything that only
/// needs to know whether and when work finished should depend on this trait
/// rather than on either concrete type.
pub trait CompletableWork {
    /// Identifier that is stable across snapshots of the same record.
    fn work_id(&self) -> Cow<'_, str>;

    fn is_completed(&self) -> bool;

    /// Raw completion timestamp as supplied by the producer.
    fn completed_at(&self) -> Option<&str>;

    fn owner(&self) -> Option<&str>;
}
