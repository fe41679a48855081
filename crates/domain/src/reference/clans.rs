use crate::entities::Clan;
use crate::value_objects::Ability::{
    Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom,
};

pub(super) fn bundled_clans() -> Vec<Clan> {
    vec![
        Clan::new("sem_cla", "Sem Clã").with_description(
            "Não pertence a nenhuma linhagem nobre, mas possui potencial ilimitado pela vontade humana.",
        ),
        Clan::new("uchiha", "Uchiha")
            .with_description(
                "Clã lendário conhecido pelo Sharingan, que concede habilidades visuais únicas.",
            )
            .with_bonus(Dexterity, 2)
            .with_bonus(Intelligence, 1)
            .with_abilities(["Sharingan"])
            .with_proficiencies(["Ninjutsu", "Genjutsu"]),
        Clan::new("hyuga", "Hyūga")
            .with_description("Clã nobre de Konoha, mestres do Byakugan e do estilo de luta Juken.")
            .with_bonus(Dexterity, 1)
            .with_bonus(Wisdom, 2)
            .with_abilities(["Byakugan", "Juken"])
            .with_proficiencies(["Taijutsu", "Percepção"]),
        Clan::new("uzumaki", "Uzumaki")
            .with_description("Clã conhecido por sua vitalidade excepcional e maestria em selos.")
            .with_bonus(Constitution, 2)
            .with_abilities(["Vitalidade Excepcional", "Maestria em Fuinjutsu"])
            .with_proficiencies(["Ninjutsu"]),
        Clan::new("nara", "Nara")
            .with_description("Clã de estrategistas brilhantes, conhecidos por manipular sombras.")
            .with_bonus(Intelligence, 2)
            .with_bonus(Charisma, 1)
            .with_abilities(["Manipulação de Sombras"])
            .with_proficiencies(["História", "Investigação"]),
        Clan::new("akimichi", "Akimichi")
            .with_description(
                "Clã capaz de manipular o tamanho de seu corpo convertendo calorias em chakra.",
            )
            .with_bonus(Strength, 1)
            .with_bonus(Constitution, 2)
            .with_abilities(["Expansão Corporal"])
            .with_proficiencies(["Taijutsu"]),
        Clan::new("yamanaka", "Yamanaka")
            .with_description(
                "Clã especializado em técnicas de transferência mental e manipulação de mentes.",
            )
            .with_bonus(Intelligence, 1)
            .with_bonus(Charisma, 2)
            .with_abilities(["Transferência Mental"])
            .with_proficiencies(["Genjutsu", "Intuição"]),
        Clan::new("inuzuka", "Inuzuka")
            .with_description(
                "Clã que luta ao lado de cães ninjas companheiros, com sentidos aguçados.",
            )
            .with_bonus(Strength, 1)
            .with_bonus(Wisdom, 2)
            .with_abilities(["Companheiro Canino"])
            .with_proficiencies(["Lidar com Animais", "Sobrevivência"]),
        Clan::new("aburame", "Aburame")
            .with_description(
                "Clã que hospeda insetos especiais em seus corpos, usando-os em combate.",
            )
            .with_bonus(Wisdom, 1)
            .with_bonus(Charisma, 2)
            .with_abilities(["Controle de Insetos"])
            .with_proficiencies(["Natureza", "Furtividade"]),
        Clan::new("hatake", "Hatake")
            .with_description("Clã raro conhecido por produzir ninjas excepcionalmente talentosos.")
            .with_bonus(Intelligence, 2)
            .with_bonus(Charisma, 1)
            .with_abilities(["Talento Natural"])
            .with_proficiencies(["Ninjutsu", "Bukijutsu"]),
        Clan::new("sarutobi", "Sarutobi")
            .with_description("Clã versátil conhecido por dominar múltiplos estilos de combate.")
            .with_bonus(Strength, 2)
            .with_bonus(Constitution, 1)
            .with_abilities(["Versatilidade Ninja"])
            .with_proficiencies(["Taijutsu", "Bukijutsu"]),
        Clan::new("kaguya", "Kaguya")
            .with_description("Clã selvagem capaz de manipular sua estrutura óssea.")
            .with_bonus(Strength, 2)
            .with_bonus(Dexterity, 2)
            .with_bonus(Constitution, 1)
            .with_abilities(["Shikotsumyaku"])
            .with_proficiencies(["Taijutsu"]),
        Clan::new("hoshigaki", "Hoshigaki")
            .with_description(
                "Clã com características de tubarão, força brutal e afinidade com água.",
            )
            .with_bonus(Strength, 1)
            .with_bonus(Constitution, 2)
            .with_abilities(["Fisiologia de Tubarão"])
            .with_proficiencies(["Ninjutsu", "Atletismo"]),
    ]
}
