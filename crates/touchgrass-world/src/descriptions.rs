//! Description pools and examine tables per room type.
//!
//! The generator draws one description uniformly from the pool of the
//! room's type. Examine tables are fixed: filler forest cells and special
//! locations each share one table.

use std::collections::BTreeMap;

use touchgrass_types::RoomType;

/// Examine keyword shared by every room, used by `examine surroundings`.
pub const SURROUNDINGS: &str = "surroundings";

const SURROUNDINGS_TEXT: &str = "You look around the area, desperately seeking civilization.";

/// Candidate descriptions for a room of the given type.
pub const fn pool(room_type: RoomType) -> &'static [&'static str] {
    match room_type {
        RoomType::Campsite => &[
            "The dreaded campsite where you were forced to 'touch grass'. Your gaming chair feels so far away...",
            "Tents and a dying campfire. Everyone's asleep - the perfect time to escape this outdoors nightmare.",
        ],
        RoomType::Forest => &[
            "Trees. More trees. These bushes are nothing like the ones in League - can't even hide in them.",
            "Woodland surrounds you. No tactical advantage like in Summoner's Rift.",
            "More forest. At least jungle camps drop gold and buffs... this is just leaves.",
        ],
        RoomType::DenseForest => &[
            "The trees are so thick here you can barely move. Makes Maokai's ultimate look welcoming.",
            "You push through thick vegetation. At least Teemo's mushrooms aren't hiding here.",
            "Dense forest blocks your path. Ivern would love it here, you absolutely don't.",
        ],
        RoomType::Clearing => &[
            "An open area provides some relief from the endless trees. Still no wifi though.",
            "A clear space in the forest. Perfect for a teamfight, except you're alone. And outside.",
            "A peaceful clearing. The equivalent of a lane without minions.",
        ],
        RoomType::Trail => &[
            "A dirt path winds through the trees. Not as straightforward as a League lane.",
            "A hiking trail. People actually do this for fun instead of playing ranked?",
            "A beaten path through the wilderness. No towers to mark the way.",
        ],
        RoomType::Creek => &[
            "A stream of water blocks your path. Your gaming phone cannot get wet! If only you could Zac jump across.",
            "Running water creates an obstacle. No blue buff to collect here.",
            "A creek babbles mockingly at you. Even river scuttler would be better than this.",
        ],
        RoomType::RangerPost => &[
            "A ranger station. Must avoid detection - you're trying to go HOME! Time to channel your inner Evelynn.",
            "A small outpost for park rangers. Stealth section activated, but no Duskblade to help you.",
            "The ranger's post. Getting caught here would be worse than a failed gank.",
        ],
        RoomType::ParkingLot => &[
            "Finally! Civilization! Various cars are parked here. Each one a potential escape route to your gaming setup.",
            "A parking area. The promised land of asphalt and vehicles.",
            "Cars! Real ones, not like Rammus. Each one could lead you back to your PC.",
        ],
        RoomType::Cabin => &[
            "A rustic cabin. Might have useful items inside, but no gaming peripherals in sight.",
            "A wooden cabin. Not as comfortable as your gaming setup, but might have something useful.",
            "A basic cabin. The anti-gaming station of accommodations.",
        ],
        RoomType::Cave => &[
            "A dark cave. Could be a good hiding spot... or certain doom. Nocturne would feel right at home.",
            "A cave mouth yawns before you. Darker than your RGB keyboard at night.",
            "A gloomy cave entrance. No respawn timer if something goes wrong in there.",
        ],
        RoomType::BearArea => &[
            "Fresh bear tracks and claw marks on trees. Enemy Volibear definitely around here!",
            "Signs of bear activity everywhere. Worse than facing Tibbers.",
            "Bear territory. No Annie to control these ones.",
        ],
        RoomType::Road => &[
            "A paved road! The way back to civilization... and League of Legends!",
            "An actual road! Your gaming chair and PC are somewhere along this path.",
            "Sweet, sweet pavement. The recall channel back to the real world.",
        ],
    }
}

/// Examine table for the forest cells that fill the grid.
pub fn filler_examine() -> BTreeMap<String, String> {
    BTreeMap::from([
        (SURROUNDINGS.to_owned(), SURROUNDINGS_TEXT.to_owned()),
        (
            "trees".to_owned(),
            "Just more trees. Your gaming setup would never betray you like this.".to_owned(),
        ),
    ])
}

/// Examine table for special locations.
pub fn landmark_examine() -> BTreeMap<String, String> {
    BTreeMap::from([
        (SURROUNDINGS.to_owned(), SURROUNDINGS_TEXT.to_owned()),
        (
            "signs".to_owned(),
            "Signs of human presence. Closer to gaming... or danger?".to_owned(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pool_is_non_empty() {
        for room_type in [
            RoomType::Campsite,
            RoomType::Forest,
            RoomType::DenseForest,
            RoomType::Clearing,
            RoomType::Trail,
            RoomType::Creek,
            RoomType::RangerPost,
            RoomType::ParkingLot,
            RoomType::Cabin,
            RoomType::Cave,
            RoomType::BearArea,
            RoomType::Road,
        ] {
            assert!(!pool(room_type).is_empty(), "{room_type} has no descriptions");
        }
    }

    #[test]
    fn examine_tables_share_surroundings() {
        assert_eq!(
            filler_examine().get(SURROUNDINGS),
            landmark_examine().get(SURROUNDINGS)
        );
        assert!(filler_examine().contains_key("trees"));
        assert!(landmark_examine().contains_key("signs"));
    }
}
