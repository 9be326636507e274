//! The embedded London network.
//!
//! A central-London subset of the Underground and the Elizabeth line.
//! Times are approximate, in whole minutes.

use crate::domain::DomainError;

use super::{Network, NetworkBuilder};

/// Create the London network.
pub fn london_network() -> Result<Network, DomainError> {
    NetworkBuilder::new()
        .rail_sequence(
            "Bakerloo",
            "Queen's Park",
            &[
                ("Kilburn Park", 2),
                ("Maida Vale", 2),
                ("Warwick Avenue", 1),
                ("Paddington", 2),
                ("Edgware Road", 2),
                ("Marylebone", 1),
                ("Baker Street", 2),
                ("Regent's Park", 2),
                ("Oxford Circus", 2),
                ("Piccadilly Circus", 2),
                ("Charing Cross", 2),
                ("Embankment", 1),
                ("Waterloo", 2),
                ("Lambeth North", 2),
                ("Elephant & Castle", 2),
            ],
        )
        .rail_sequence(
            "Elizabeth",
            "Paddington",
            &[
                ("Bond Street", 3),
                ("Tottenham Court Road", 2),
                ("Farringdon", 2),
                ("Liverpool Street", 2),
                ("Whitechapel", 3),
                ("Canary Wharf", 4),
            ],
        )
        .rail_sequence(
            "Central",
            "Notting Hill Gate",
            &[
                ("Queensway", 1),
                ("Lancaster Gate", 2),
                ("Marble Arch", 2),
                ("Bond Street", 1),
                ("Oxford Circus", 2),
                ("Tottenham Court Road", 1),
                ("Holborn", 2),
                ("Chancery Lane", 1),
                ("St. Paul's", 2),
                ("Bank", 2),
                ("Liverpool Street", 2),
            ],
        )
        .rail_sequence(
            "Victoria",
            "Vauxhall",
            &[
                ("Pimlico", 2),
                ("Victoria", 2),
                ("Green Park", 2),
                ("Oxford Circus", 2),
                ("Warren Street", 2),
                ("Euston", 1),
                ("King's Cross St. Pancras", 2),
                ("Highbury & Islington", 3),
            ],
        )
        .rail_sequence(
            "Jubilee",
            "Baker Street",
            &[
                ("Bond Street", 2),
                ("Green Park", 2),
                ("Westminster", 2),
                ("Waterloo", 2),
                ("Southwark", 1),
                ("London Bridge", 2),
                ("Bermondsey", 2),
                ("Canada Water", 1),
                ("Canary Wharf", 3),
            ],
        )
        .rail_sequence(
            "Northern",
            "Euston",
            &[
                ("King's Cross St. Pancras", 2),
                ("Angel", 2),
                ("Old Street", 2),
                ("Moorgate", 2),
                ("Bank", 2),
                ("London Bridge", 2),
            ],
        )
        .rail_sequence(
            "Northern",
            "Euston",
            &[
                ("Warren Street", 1),
                ("Goodge Street", 1),
                ("Tottenham Court Road", 2),
                ("Leicester Square", 1),
                ("Charing Cross", 1),
                ("Embankment", 1),
            ],
        )
        .rail_sequence(
            "Piccadilly",
            "King's Cross St. Pancras",
            &[
                ("Russell Square", 2),
                ("Holborn", 2),
                ("Covent Garden", 1),
                ("Leicester Square", 1),
                ("Piccadilly Circus", 1),
                ("Green Park", 2),
                ("Hyde Park Corner", 2),
                ("Knightsbridge", 1),
            ],
        )
        .rail_sequence(
            "District",
            "Victoria",
            &[
                ("St. James's Park", 2),
                ("Westminster", 1),
                ("Embankment", 2),
                ("Temple", 1),
                ("Blackfriars", 2),
                ("Mansion House", 1),
                ("Cannon Street", 1),
                ("Monument", 1),
                ("Tower Hill", 2),
            ],
        )
        .rail("Waterloo & City", "Waterloo", "Bank", 4)
        // Changes of line within a station
        .change("Paddington", "Bakerloo", "Elizabeth", 6)
        .change("Baker Street", "Bakerloo", "Jubilee", 3)
        .change("Oxford Circus", "Bakerloo", "Central", 3)
        .change("Oxford Circus", "Bakerloo", "Victoria", 2)
        .change("Oxford Circus", "Central", "Victoria", 3)
        .change("Bond Street", "Elizabeth", "Central", 5)
        .change("Bond Street", "Elizabeth", "Jubilee", 5)
        .change("Bond Street", "Central", "Jubilee", 3)
        .change("Tottenham Court Road", "Elizabeth", "Central", 4)
        .change("Tottenham Court Road", "Elizabeth", "Northern", 4)
        .change("Tottenham Court Road", "Central", "Northern", 3)
        .change("Liverpool Street", "Elizabeth", "Central", 5)
        .change("Canary Wharf", "Elizabeth", "Jubilee", 6)
        .change("Holborn", "Central", "Piccadilly", 3)
        .change("Bank", "Central", "Northern", 4)
        .change("Bank", "Central", "Waterloo & City", 4)
        .change("Bank", "Northern", "Waterloo & City", 5)
        .change("Green Park", "Victoria", "Jubilee", 4)
        .change("Green Park", "Victoria", "Piccadilly", 3)
        .change("Green Park", "Jubilee", "Piccadilly", 4)
        .change("Euston", "Victoria", "Northern", 2)
        .change("Warren Street", "Victoria", "Northern", 2)
        .change("King's Cross St. Pancras", "Victoria", "Northern", 3)
        .change("King's Cross St. Pancras", "Victoria", "Piccadilly", 3)
        .change("King's Cross St. Pancras", "Northern", "Piccadilly", 4)
        .change("Leicester Square", "Northern", "Piccadilly", 2)
        .change("Piccadilly Circus", "Bakerloo", "Piccadilly", 2)
        .change("Charing Cross", "Bakerloo", "Northern", 3)
        .change("Embankment", "Bakerloo", "Northern", 2)
        .change("Embankment", "Bakerloo", "District", 2)
        .change("Embankment", "Northern", "District", 2)
        .change("Waterloo", "Bakerloo", "Jubilee", 5)
        .change("Waterloo", "Bakerloo", "Waterloo & City", 4)
        .change("Waterloo", "Jubilee", "Waterloo & City", 4)
        .change("Westminster", "Jubilee", "District", 3)
        .change("Victoria", "Victoria", "District", 3)
        .change("London Bridge", "Jubilee", "Northern", 3)
        // Walks between nearby stations
        .interchange("Bank", "Northern", "Monument", "District", 5)
        .interchange("Bank", "Central", "Monument", "District", 6)
        .interchange("Charing Cross", "Bakerloo", "Embankment", "District", 5)
        .interchange("Euston", "Northern", "Warren Street", "Victoria", 7)
        .interchange("Moorgate", "Northern", "Liverpool Street", "Central", 6)
        .interchange("Marble Arch", "Central", "Bond Street", "Jubilee", 8)
        .interchange("Cannon Street", "District", "Bank", "Northern", 6)
        .build()
}
