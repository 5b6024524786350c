use std::rc::Rc;

use quadview_tui::keys::PaneKeymap;
use quadview_tui::pane::PANE_COUNT;
use quadview_tui::table::{Column, TablePane};

/// The four static tables, in grid order: Users, Orders, Products, Logs.
pub fn sample_panes(keymap: Rc<PaneKeymap>) -> [TablePane; PANE_COUNT] {
    [
        TablePane::new(
            "Users",
            vec![Column::new("ID", 4), Column::new("Name", 14), Column::new("Role", 10)],
            rows(&[
                ["1", "Alice", "Admin"],
                ["2", "Bob", "Editor"],
                ["3", "Charlie", "Viewer"],
                ["4", "Diana", "Admin"],
                ["5", "Evan", "Editor"],
                ["6", "Fiona", "Viewer"],
                ["7", "Gabe", "Editor"],
                ["8", "Hana", "Viewer"],
            ]),
            Rc::clone(&keymap),
        ),
        TablePane::new(
            "Orders",
            vec![Column::new("Order", 7), Column::new("Customer", 14), Column::new("Total", 8)],
            rows(&[
                ["#1001", "Alice", "$120.00"],
                ["#1002", "Bob", "$56.80"],
                ["#1003", "Charlie", "$240.50"],
                ["#1004", "Diana", "$18.99"],
                ["#1005", "Evan", "$75.20"],
                ["#1006", "Fiona", "$310.00"],
                ["#1007", "Gabe", "$49.90"],
                ["#1008", "Hana", "$88.88"],
            ]),
            Rc::clone(&keymap),
        ),
        TablePane::new(
            "Products",
            vec![Column::new("SKU", 8), Column::new("Product", 16), Column::new("Stock", 6)],
            rows(&[
                ["A-001", "Keyboard", "42"],
                ["A-002", "Mouse", "133"],
                ["A-003", "Monitor", "12"],
                ["A-004", "Chair", "8"],
                ["A-005", "Desk", "5"],
                ["A-006", "USB Hub", "64"],
                ["A-007", "Webcam", "27"],
                ["A-008", "Headset", "35"],
            ]),
            Rc::clone(&keymap),
        ),
        TablePane::new(
            "Logs",
            vec![Column::new("Time", 8), Column::new("Level", 8), Column::new("Message", 24)],
            rows(&[
                ["12:01", "INFO", "Server started"],
                ["12:02", "WARN", "High latency"],
                ["12:03", "INFO", "User login: alice"],
                ["12:04", "ERROR", "DB timeout"],
                ["12:05", "INFO", "Retry succeeded"],
                ["12:06", "INFO", "User logout: alice"],
                ["12:07", "INFO", "Metrics flushed"],
                ["12:08", "INFO", "Healthcheck OK"],
            ]),
            keymap,
        ),
    ]
}

fn rows(cells: &[[&str; 3]]) -> Vec<Vec<String>> {
    cells.iter().map(|row| row.iter().map(|c| c.to_string()).collect()).collect()
}
