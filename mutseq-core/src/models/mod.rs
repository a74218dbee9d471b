pub mod mutation;
pub mod sequence;
pub mod window;

// re-export for cleaner imports
pub use self::mutation::MutationDescriptor;
pub use self::sequence::{ReferenceSequence, SequenceTable};
pub use self::window::MutationWindow;
