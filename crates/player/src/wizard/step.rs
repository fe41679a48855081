use serde::{Deserialize, Serialize};

/// The seven wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Clan = 1,
    Class = 2,
    Attributes = 3,
    Description = 4,
    Equipment = 5,
    Jutsus = 6,
    Summary = 7,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Clan;
    pub const LAST: WizardStep = WizardStep::Summary;

    pub const ALL: [WizardStep; 7] = [
        WizardStep::Clan,
        WizardStep::Class,
        WizardStep::Attributes,
        WizardStep::Description,
        WizardStep::Equipment,
        WizardStep::Jutsus,
        WizardStep::Summary,
    ];

    /// 1-based position shown in the progress bar.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Following step, staying on the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Preceding step, staying on the first one.
    pub fn prev(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Clan => "Clã",
            WizardStep::Class => "Classe",
            WizardStep::Attributes => "Atributos",
            WizardStep::Description => "Descrição",
            WizardStep::Equipment => "Equipamento",
            WizardStep::Jutsus => "Jutsus",
            WizardStep::Summary => "Resumo",
        }
    }
}
