use super::allocator::AllocationResult;
use super::formatter::{format_clock, round_minutes};
use super::messages::Message;
use super::session::CopyStatus;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Builds the results table: one row per task, in weight order.
    pub fn allocation_table(result: &AllocationResult, show_raw_minutes: bool, copied: CopyStatus) -> Table {
        let mut table = Table::new();
        let mut header = row![Message::ColumnTask, Message::ColumnWeight, Message::ColumnTime];
        if show_raw_minutes {
            header.add_cell(Cell::new(&Message::ColumnRawMinutes.to_string()));
        }
        table.add_row(header);

        for entry in &result.entries {
            let badge = match copied {
                CopyStatus::All => true,
                CopyStatus::Single(index) => index == entry.index,
                CopyStatus::None => false,
            };
            let clock = if badge {
                format!("{} {}", entry.clock, Message::CopiedBadge)
            } else {
                entry.clock.clone()
            };

            let mut cells = vec![Cell::new(&entry.label), Cell::new(&entry.weight.to_string()), Cell::new(&clock)];
            if show_raw_minutes {
                cells.push(Cell::new(&format!("{:.2}", entry.minutes)));
            }
            table.add_row(Row::new(cells));
        }

        table
    }

    /// Prints the results table followed by the copy-all block.
    pub fn allocation(result: &AllocationResult, show_raw_minutes: bool, copied: CopyStatus) {
        println!("\n{}", Message::ResultsHeader);
        Self::allocation_table(result, show_raw_minutes, copied).printstd();

        let rounded: i64 = result.entries.iter().map(|entry| round_minutes(entry.minutes)).sum();
        if rounded != i64::from(result.total) {
            println!(
                "{}",
                Message::RoundedTotalDiffers(format_clock(rounded as f64), format_clock(f64::from(result.total)))
            );
        }

        println!("\n{}", Message::CopyAllHeader);
        println!("{}", result.copy_all_text());
    }
}
