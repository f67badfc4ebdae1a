//! Built-in demo network.
//!
//! The Yellow and Blue lines of the Delhi Metro, meeting at Rajiv Chowk.
//! Used when no data file is configured.

use crate::domain::StationRecord;

use super::StationSource;
use super::error::SourceError;

const YELLOW: &[&str] = &[
    "Samaypur Badli",
    "Rohini Sector 18, 19",
    "Haiderpur Badli Mor",
    "Jahangirpuri",
    "Adarsh Nagar",
    "Azadpur",
    "Model Town",
    "Guru Tegh Bahadur Nagar",
    "Vishwavidyalaya",
    "Vidhan Sabha",
    "Civil Lines",
    "Kashmere Gate",
    "Chandni Chowk",
    "Chawri Bazar",
    "New Delhi",
    "Rajiv Chowk",
    "Patel Chowk",
    "Central Secretariat",
    "Udyog Bhawan",
    "Lok Kalyan Marg",
    "Jor Bagh",
    "Dilli Haat - INA",
    "AIIMS",
    "Green Park",
    "Hauz Khas",
    "Malviya Nagar",
    "Saket",
    "Qutab Minar",
    "Chhatarpur",
    "Sultanpur",
    "Ghitorni",
    "Arjan Garh",
    "Guru Dronacharya",
    "Sikandarpur",
    "MG Road",
    "IFFCO Chowk",
    "Huda City Centre",
];

const BLUE: &[&str] = &[
    "Dwarka Sector 21",
    "Dwarka Sector 8",
    "Dwarka Sector 9",
    "Dwarka Sector 10",
    "Dwarka Sector 11",
    "Dwarka Sector 12",
    "Dwarka Sector 13",
    "Dwarka Sector 14",
    "Dwarka",
    "Dwarka Mor",
    "Nawada",
    "Uttam Nagar West",
    "Uttam Nagar East",
    "Janakpuri West",
    "Janakpuri East",
    "Tilak Nagar",
    "Subhash Nagar",
    "Tagore Garden",
    "Rajouri Garden",
    "Ramesh Nagar",
    "Moti Nagar",
    "Kirti Nagar",
    "Shadipur",
    "Patel Nagar",
    "Rajendra Place",
    "Karol Bagh",
    "Jhandewalan",
    "Ramakrishna Ashram Marg",
    "Rajiv Chowk",
    "Barakhamba Road",
    "Mandi House",
    "Supreme Court",
    "Indraprastha",
    "Yamuna Bank",
    "Akshardham",
    "Mayur Vihar Phase 1",
    "Mayur Vihar Extension",
    "New Ashok Nagar",
    "Noida Sector 15",
    "Noida Sector 16",
    "Noida Sector 18",
    "Botanical Garden",
    "Golf Course",
    "Noida City Centre",
    "Noida Sector 34",
    "Noida Sector 52",
    "Noida Sector 61",
    "Noida Sector 59",
    "Noida Sector 62",
    "Noida Electronic City",
];

/// The compiled-in Yellow/Blue demo network.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl EmbeddedDataset {
    pub fn records() -> Vec<StationRecord> {
        [("Yellow", YELLOW), ("Blue", BLUE)]
            .into_iter()
            .flat_map(|(line, names)| {
                names
                    .iter()
                    .enumerate()
                    .map(move |(i, name)| StationRecord::new(*name, line, i as u32))
            })
            .collect()
    }
}

impl StationSource for EmbeddedDataset {
    fn load(&self) -> Result<Vec<StationRecord>, SourceError> {
        Ok(Self::records())
    }

    fn describe(&self) -> String {
        "embedded Yellow/Blue dataset".to_string()
    }
}
