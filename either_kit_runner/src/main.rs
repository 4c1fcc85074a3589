use either_kit::{left, right, Checked, Either};

fn classify(n: i32) -> Either<String, String> {
    if n > 5 {
        right("big".to_owned())
    } else {
        left("small".to_owned())
    }
}

fn render(value: Either<String, String>) -> String {
    value.case(|l| format!("L:{l}"), |r| format!("R:{r}"))
}

fn pipeline(start: Either<String, i32>) -> String {
    render(start.map(|n| n * 2).bind(classify))
}

fn main() {
    println!("{}", pipeline(right(5)));
    println!("{}", pipeline(left("err".to_owned())));

    match left::<String, i32>("err".to_owned()).try_map(None::<fn(i32) -> i32>) {
        Ok(value) => println!("{value:?}"),
        Err(error) => println!("{error}"),
    }
}
