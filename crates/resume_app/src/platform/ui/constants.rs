pub const CMD_UPLOAD: &str = "upload";
pub const CMD_FILE: &str = "file";
pub const CMD_JOB_DESCRIPTION: &str = "jd";
pub const CMD_JOB_DESCRIPTION_APPEND: &str = "jd+";
pub const CMD_ANALYZE: &str = "analyze";
pub const CMD_REWRITE: &str = "rewrite";
pub const CMD_GO: &str = "go";
pub const CMD_HOME: &str = "home";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
pub const CMD_EXIT: &str = "exit";
