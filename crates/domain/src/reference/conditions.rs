use crate::entities::ConditionSet;

pub(super) fn bundled_conditions() -> ConditionSet {
    ConditionSet::new([
        "Agarrado",
        "Amedrontado",
        "Atordoado",
        "Caído",
        "Cego",
        "Enfeitiçado",
        "Envenenado",
        "Exausto",
        "Impedido",
        "Inconsciente",
        "Invisível",
        "Paralisado",
        "Petrificado",
        "Surdo",
    ])
}
