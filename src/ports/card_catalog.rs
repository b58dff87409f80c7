//! CardCatalog port - read-only access to the card reference table.

use crate::domain::cards::Card;
use crate::domain::foundation::CardId;

/// The static card table, loaded once and never mutated.
///
/// Lookups are synchronous: the catalog is an in-memory reference table and
/// selection runs inside pure domain code.
pub trait CardCatalog: Send + Sync {
    /// Every card, in catalog order.
    fn all(&self) -> &[Card];

    /// Looks up one card by id.
    fn get(&self, id: &CardId) -> Option<&Card> {
        self.all().iter().find(|c| &c.id == id)
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
