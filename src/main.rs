use volley::error::AppResult;

fn main() -> AppResult<()> {
    volley::run()
}
