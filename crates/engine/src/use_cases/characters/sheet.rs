//! Sheet view shared by the owner page and the public share link.

use std::sync::Arc;

use shinobi_domain::{Character, CharacterSheet, ReferenceCatalog};

use super::{load_character, load_shared_character, CharacterError};
use crate::infrastructure::ports::CharacterRepo;

pub struct ViewSheet {
    repo: Arc<dyn CharacterRepo>,
    reference: Arc<ReferenceCatalog>,
}

impl ViewSheet {
    pub fn new(repo: Arc<dyn CharacterRepo>, reference: Arc<ReferenceCatalog>) -> Self {
        Self { repo, reference }
    }

    pub async fn by_id(&self, id: &str) -> Result<CharacterSheet, CharacterError> {
        let character = load_character(self.repo.as_ref(), id).await?;
        Ok(self.render(character))
    }

    pub async fn by_share_id(&self, share_id: &str) -> Result<CharacterSheet, CharacterError> {
        let character = load_shared_character(self.repo.as_ref(), share_id).await?;
        Ok(self.render(character))
    }

    fn render(&self, character: Character) -> CharacterSheet {
        let clan = self.reference.clan(character.clan_id.as_str());
        let class = self.reference.class(character.class_id.as_str());
        CharacterSheet::build(character, clan, class, &self.reference.xp_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterRepo;
    use crate::use_cases::characters::test_support::stored_character;

    #[tokio::test]
    async fn when_viewed_by_owner_or_share_link_then_sheets_match() {
        let stored = stored_character();
        let id = stored.id.to_string();
        let share_id = stored.share_id.to_string();
        let by_share = stored.clone();

        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_get_by_share_id()
            .returning(move |_| Ok(Some(by_share.clone())));
        let view = ViewSheet::new(Arc::new(repo), Arc::new(ReferenceCatalog::bundled()));

        let owner = view.by_id(&id).await.unwrap();
        let shared = view.by_share_id(&share_id).await.unwrap();

        assert_eq!(owner, shared);
        assert_eq!(owner.effective_attributes.constitution, 16);
        assert_eq!(owner.modifiers.constitution, 3);
    }
}
