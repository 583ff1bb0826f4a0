use wafprobe::entry;
use wafprobe::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
