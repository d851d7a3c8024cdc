// User-facing text of the shop prompt.

pub const WELCOME: &str = "Welcome to the sandwhich shop!\n";
pub const EXIT_MESSAGE: &str = "\nhave a good one!";

pub const QUESTION_COST: &str = "How much does it cost?";
pub const QUESTION_HOW_BIG: &str = "How big should your sandwhich be? (inches)";
pub const QUESTION_ANOTHER: &str = "Would you like to try some more sandwhichs?[YES/no/ls]";

pub const INPUT_MARKER: &str = "> ";
pub const WHAT_NEXT: &str = "\nWhat would you like to do next?";
pub const NO_INVENTORY: &str = "No inventory has been made yet.";
pub const UNKNOWN_OPTION: &str = "\nUnknown option: for help use \"?\" or \"help\"";

pub const HELP_ROWS: [&str; 7] = [
    "Command\tDescription",
    "-------\t-----------",
    "ls\tlist sandwhich sale inquries",
    "?\tprints help table",
    "new\tstarts a new inqury",
    "ENTER\tstarts a new inqury",
    "exit\texits the program",
];

pub const INVENTORY_HEADER: &str = "Cost\tSize\tCost Per Serving\tAvailable Servings";
