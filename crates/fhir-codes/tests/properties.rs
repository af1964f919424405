#![allow(missing_docs)]

use fhir_codes::r4::{DataType, IssueType, ResourceType};
use fhir_codes::{FhirCode, builtin, registry};
use proptest::prelude::*;

fn system_names() -> Vec<&'static str> {
    builtin().system_names().collect()
}

proptest! {
    #[test]
    fn decode_then_encode_is_identity(
        system in prop::sample::select(system_names()),
        tag in "[ -~]{0,24}",
    ) {
        if let Ok(symbol) = registry::decode(system, &tag) {
            prop_assert_eq!(registry::encode(system, symbol).unwrap(), tag.as_str());
        }
    }

    #[test]
    fn member_positions_round_trip(system in prop::sample::select(system_names()), pick in any::<prop::sample::Index>()) {
        let members: Vec<_> = registry::members(system).unwrap().collect();
        let member = members[pick.index(members.len())];
        prop_assert_eq!(registry::decode(system, member.wire_tag).unwrap(), member.symbol);
        prop_assert_eq!(registry::encode(system, member.symbol).unwrap(), member.wire_tag);
    }

    #[test]
    fn typed_codes_round_trip(pick in any::<prop::sample::Index>()) {
        let resource = ResourceType::ALL[pick.index(ResourceType::ALL.len())];
        prop_assert_eq!(ResourceType::from_wire_tag(resource.wire_tag()).unwrap(), resource);
        prop_assert_eq!(resource.wire_tag().parse::<ResourceType>().unwrap(), resource);

        let data_type = DataType::ALL[pick.index(DataType::ALL.len())];
        prop_assert_eq!(DataType::from_symbol(data_type.symbol()).unwrap(), data_type);
    }

    #[test]
    fn case_changed_tags_are_rejected(pick in any::<prop::sample::Index>()) {
        let issue = IssueType::ALL[pick.index(IssueType::ALL.len())];
        let shouted = issue.wire_tag().to_uppercase();
        if shouted != issue.wire_tag() {
            prop_assert!(IssueType::from_wire_tag(&shouted).is_err());
        }
    }
}
