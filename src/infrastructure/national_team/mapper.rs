//! Conversion between the API shape and the stored document

use crate::domain::{NationalTeam, NationalTeamEntity, NationalTeamId};

/// Maps national teams between the HTTP representation and storage
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalTeamMapper;

impl NationalTeamMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build a new document from an API body whose id has been validated
    pub fn api_to_entity(&self, id: NationalTeamId, api: &NationalTeam) -> NationalTeamEntity {
        NationalTeamEntity::new(id, api.name.clone(), api.confederation.clone())
    }

    /// The service address is left unset; it is stamped by the read path only
    pub fn entity_to_api(&self, entity: &NationalTeamEntity) -> NationalTeam {
        NationalTeam::new(
            entity.nationalteam_id().value(),
            entity.name(),
            entity.confederation(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_to_entity() {
        let mapper = NationalTeamMapper::new();
        let api = NationalTeam::new(4, "Argentina", "CONMEBOL").with_service_address("ignored");

        let entity = mapper.api_to_entity(NationalTeamId::new(4).unwrap(), &api);

        assert_eq!(entity.nationalteam_id().value(), 4);
        assert_eq!(entity.name(), "Argentina");
        assert_eq!(entity.confederation(), "CONMEBOL");
        assert_eq!(entity.version(), 0);
    }

    #[test]
    fn test_entity_to_api() {
        let mapper = NationalTeamMapper::new();
        let entity =
            NationalTeamEntity::new(NationalTeamId::new(8).unwrap(), "Morocco", "CAF").next_version();

        let api = mapper.entity_to_api(&entity);

        assert_eq!(api, NationalTeam::new(8, "Morocco", "CAF"));
        assert!(api.service_address.is_none());
    }
}
