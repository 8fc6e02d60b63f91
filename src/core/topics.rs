use crate::core::client::PexelsClient;
use crate::domain::model::QueryOptions;
use crate::utils::error::{PexelsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates the `Topic` enum, its term table and a `get_*`/`query_*` pair
/// on `PexelsClient` for every entry.
macro_rules! topics {
    ($( $variant:ident => $term:literal, $get:ident, $query:ident; )+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Topic {
            $( $variant, )+
        }

        impl Topic {
            pub const ALL: &'static [Topic] = &[ $( Topic::$variant, )+ ];

            /// Search keyword sent as `query=`.
            pub fn term(self) -> &'static str {
                match self {
                    $( Topic::$variant => $term, )+
                }
            }
        }

        impl PexelsClient {
            $(
                #[doc = concat!("First page of 20 `", $term, "` photos.")]
                pub async fn $get(&self) -> Result<String> {
                    self.get_topic(Topic::$variant).await
                }

                #[doc = concat!("`", $term, "` photos; `per_page` defaults to 15 and `page` to 1.")]
                pub async fn $query(&self, options: QueryOptions) -> Result<String> {
                    self.query_topic(Topic::$variant, options).await
                }
            )+
        }
    };
}

topics! {
    Abstract => "abstract", get_abstract, query_abstract;
    Adventure => "adventure", get_adventure, query_adventure;
    Beach => "beach", get_beach, query_beach;
    Books => "books", get_books, query_books;
    Computer => "computer", get_computer, query_computer;
    Construction => "construction", get_construction, query_construction;
    Couple => "couple", get_couple, query_couple;
    Creative => "creative", get_creative, query_creative;
    Desert => "desert", get_desert, query_desert;
    Fashion => "fashion", get_fashion, query_fashion;
    Fitness => "fitness", get_fitness, query_fitness;
    Grass => "grass", get_grass, query_grass;
    Green => "green", get_green, query_green;
    Gym => "gym", get_gym, query_gym;
    Home => "home", get_home, query_home;
    Industry => "industry", get_industry, query_industry;
    Iphone => "iphone", get_iphone, query_iphone;
    Kids => "kids", get_kids, query_kids;
    Laptop => "laptop", get_laptop, query_laptop;
    Marketing => "marketing", get_marketing, query_marketing;
    Meeting => "meeting", get_meeting, query_meeting;
    Mobile => "mobile", get_mobile, query_mobile;
    Mockup => "mockup", get_mockup, query_mockup;
    Model => "model", get_model, query_model;
    Money => "money", get_money, query_money;
    Office => "office", get_office, query_office;
    Paint => "paint", get_paint, query_paint;
    Person => "person", get_person, query_person;
    Plane => "plane", get_plane, query_plane;
    Sad => "sad", get_sad, query_sad;
    Sport => "sport", get_sport, query_sport;
    Street => "street", get_street, query_street;
    Student => "student", get_student, query_student;
    Summer => "summer", get_summer, query_summer;
    Sunset => "sunset", get_sunset, query_sunset;
    Technology => "technology", get_technology, query_technology;
    Wall => "wall", get_wall, query_wall;
    Wedding => "wedding", get_wedding, query_wedding;
    Wood => "wood", get_wood, query_wood;
    Writing => "writing", get_writing, query_writing;
    Yoga => "yoga", get_yoga, query_yoga;
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.term())
    }
}

impl FromStr for Topic {
    type Err = PexelsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.term().eq_ignore_ascii_case(name))
            .ok_or_else(|| PexelsError::UnknownTopicError {
                name: name.to_string(),
            })
    }
}
