use colour::red;

pub fn print_intro() {
    println!(
        r#"
    __                                          __
   / /_  ___  ____ _____ ___  _________ ______/ /_
  / __ \/ _ \/ __ `/ __ `__ \/ ___/ __ `/ ___/ __/
 / /_/ /  __/ /_/ / / / / / / /__/ /_/ (__  ) /_
/_.___/\___/\__,_/_/ /_/ /_/\___/\__,_/____/\__/ "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
