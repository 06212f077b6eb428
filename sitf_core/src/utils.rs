use colour::red;

pub fn print_intro() {
    println!(
        r#"
     _ _    __
 ___(_) |_ / _|
/ __| | __| |_
\__ \ | |_|  _|
|___/_|\__|_|  "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Large files will take noticeably longer to decode.\n\n");
    }
}
