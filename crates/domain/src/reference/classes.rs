use crate::entities::{ClassProficiencies, NinjaClass};
use crate::value_objects::Ability::{
    Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom,
};

pub(super) fn bundled_classes() -> Vec<NinjaClass> {
    vec![
        NinjaClass::new("genjutsu_specialist", "Especialista em Genjutsu", "1d8", "1d10", Wisdom)
            .with_description("Mestre em ilusões, focado em manipular a mente dos inimigos.")
            .with_proficiencies(ClassProficiencies::new(
                ["Leve"],
                ["Armas Simples", "Kunai", "Shuriken"],
                ["Genjutsu", "Intuição", "Enganação"],
                [Wisdom, Charisma],
            ))
            .with_starting_equipment([
                "Colete de Couro",
                "Kunai (3x)",
                "Shuriken (10x)",
                "Kit Ninja Básico",
            ])
            .with_starting_wealth("3d4 x 100 Ryo")
            .with_features(["Ilusão Básica", "Resistência Mental"]),
        NinjaClass::new("hunter_ninja", "Ninja Caçador", "1d8", "1d8", Dexterity)
            .with_description(
                "Assassino implacável que usa furtividade e truques para eliminar alvos.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve", "Média"],
                ["Armas Simples", "Armas Marciais", "Kunai", "Tanto"],
                ["Furtividade", "Acrobacia", "Percepção"],
                [Dexterity, Intelligence],
            ))
            .with_starting_equipment([
                "Colete de Combate",
                "Tanto",
                "Kunai (5x)",
                "Kit de Veneno",
                "Máscara de Caçador",
            ])
            .with_starting_wealth("4d4 x 100 Ryo")
            .with_features(["Ataque Furtivo", "Conhecimento Anatômico"]),
        NinjaClass::new("strategist", "Mestre Estrategista", "1d8", "1d8", Intelligence)
            .with_description(
                "Comandante tático que usa astúcia e engenhosidade para controlar o campo de batalha.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve"],
                ["Armas Simples"],
                ["História", "Investigação", "Percepção", "Persuasão"],
                [Intelligence, Wisdom],
            ))
            .with_starting_equipment([
                "Colete de Couro Batido",
                "Kunai (3x)",
                "Kit de Armadilhas",
                "Mapa Estratégico",
            ])
            .with_starting_wealth("3d4 x 100 Ryo")
            .with_features(["Planejamento Tático", "Armadilhas Avançadas"]),
        NinjaClass::new("medical_ninja", "Ninja Médico", "1d8", "1d10", Wisdom)
            .with_description(
                "Praticante avançado de medicina que luta para proteger e manter aliados vivos.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve"],
                ["Armas Simples", "Kunai"],
                ["Medicina", "Natureza", "Intuição"],
                [Wisdom, Constitution],
            ))
            .with_starting_equipment([
                "Colete de Couro",
                "Kunai (2x)",
                "Kit Médico Avançado",
                "Pergaminhos de Cura",
            ])
            .with_starting_wealth("4d4 x 100 Ryo")
            .with_features(["Cura com Chakra", "Diagnóstico Médico"]),
        NinjaClass::new("ninjutsu_specialist", "Especialista em Ninjutsu", "1d6", "1d12", Intelligence)
            .with_description(
                "Mestre em técnicas de liberação de natureza, capaz de moldar chakra em ataques devastadores.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve"],
                ["Armas Simples"],
                ["Ninjutsu", "Ofícios", "Natureza"],
                [Intelligence, Constitution],
            ))
            .with_starting_equipment([
                "Colete de Couro",
                "Kunai (3x)",
                "Pergaminhos de Jutsu",
                "Kit de Reagentes",
            ])
            .with_starting_wealth("3d4 x 100 Ryo")
            .with_features(["Afinidade Elemental", "Moldar Chakra"]),
        NinjaClass::new("scout_ninja", "Ninja Explorador", "1d10", "1d8", Dexterity)
            .with_description(
                "Versátil, capaz de completar a maioria das tarefas e preencher funções em uma equipe.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve", "Média"],
                ["Armas Simples", "Armas Marciais"],
                ["Atletismo", "Sobrevivência", "Percepção", "Furtividade"],
                [Strength, Dexterity],
            ))
            .with_starting_equipment([
                "Colete de Combate",
                "Arco e Flechas (20x)",
                "Kunai (5x)",
                "Kit de Rastreamento",
            ])
            .with_starting_wealth("5d4 x 100 Ryo")
            .with_features(["Versatilidade", "Sentidos Aguçados"]),
        NinjaClass::new("taijutsu_specialist", "Especialista em Taijutsu", "1d10", "1d8", Strength)
            .with_description(
                "Mestre do combate corpo a corpo, utilizando combos e técnicas físicas devastadoras.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve", "Média"],
                ["Armas Simples", "Armas Marciais", "Combate Desarmado"],
                ["Taijutsu", "Atletismo", "Acrobacia"],
                [Strength, Constitution],
            ))
            .with_starting_equipment([
                "Colete de Couro Batido",
                "Bandagens de Combate",
                "Pesos de Treinamento",
            ])
            .with_starting_wealth("3d4 x 100 Ryo")
            .with_features(["Ataque Desarmado Aprimorado", "Combo de Golpes"]),
        NinjaClass::new("weapon_specialist", "Especialista em Armas", "1d10", "1d6", Strength)
            .with_description(
                "Mestre do combate marcial que utiliza uma ampla variedade de armas e armaduras.",
            )
            .with_proficiencies(ClassProficiencies::new(
                ["Leve", "Média", "Pesada"],
                ["Armas Simples", "Armas Marciais", "Armas Exóticas"],
                ["Bukijutsu", "Atletismo", "Intimidação"],
                [Strength, Constitution],
            ))
            .with_starting_equipment([
                "Colete de Chunin",
                "Katana ou Espada Longa",
                "Kunai (5x)",
                "Shuriken (10x)",
                "Kit de Manutenção de Armas",
            ])
            .with_starting_wealth("5d4 x 100 Ryo")
            .with_features(["Maestria em Armas", "Estilo de Combate"]),
    ]
}
