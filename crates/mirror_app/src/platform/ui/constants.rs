pub const APP_TITLE: &str = "RepoMirror";
pub const APP_SUBTITLE: &str = "Deep Code Profiler";
pub const PROMPT: &str = "> ";
pub const URL_PLACEHOLDER: &str = "https://github.com/username/repository";

pub const CMD_THEME: &str = ":theme";
pub const CMD_HELP: &str = ":help";
pub const CMD_QUIT: &str = ":quit";

pub const HISTORY_NAME_WIDTH: usize = 40;
