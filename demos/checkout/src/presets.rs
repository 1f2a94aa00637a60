//! The four station line-ups compared by the demo.

use clap::ValueEnum;

use ck_station::Station;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// One FIFO station.
    Fifo,
    /// One priority station.
    Prio,
    /// One FIFO and one priority station.
    Mixed,
    /// Two FIFO stations and one priority station.
    Custom,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Fifo, Preset::Prio, Preset::Mixed, Preset::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Preset::Fifo   => "fifo",
            Preset::Prio   => "prio",
            Preset::Mixed  => "mixed",
            Preset::Custom => "custom",
        }
    }

    /// Fresh stations for one run; `max_priority_items` configures every
    /// priority station.
    pub fn stations(self, max_priority_items: u32) -> Vec<Station> {
        match self {
            Preset::Fifo => vec![Station::fifo("FIFO")],
            Preset::Prio => vec![Station::priority("PRIO", max_priority_items)],
            Preset::Mixed => vec![
                Station::fifo("FIFO"),
                Station::priority("PRIO", max_priority_items),
            ],
            Preset::Custom => vec![
                Station::fifo("FIFO-1"),
                Station::fifo("FIFO-2"),
                Station::priority("PRIO", max_priority_items),
            ],
        }
    }
}
