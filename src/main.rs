use std::io;
use std::io::Write;
use std::path::Path;
use tracing::info;
use bookshelf::books::domain::model::BookEntity;
use bookshelf::catalog::domain::service::Catalog;
use bookshelf::catalog::factory::create_catalog_repository;
use bookshelf::catalog::repository::CatalogRepository;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::isbn::validate_isbn;

const MENU: &str = "Library Management System
        1. Add Book
        2. Borrow Book
        3. Return Book
        4. View Books
        5. Save Library
        6. Load Library
        7. Exit";

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
}

// reads one trimmed line, None on closed stdin
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn add_book(catalog: &mut Catalog) {
    let Some(title) = prompt("Enter book title: ") else { return };
    let Some(author) = prompt("Enter book author: ") else { return };
    let Some(isbn) = prompt("Enter ISBN: ") else { return };
    if !validate_isbn(isbn.as_str()) {
        println!("Invalid ISBN format. Please use the format 'XXX-XXXXXXXXXX'.");
        return;
    }
    catalog.add_book(BookEntity::new(title.as_str(), author.as_str(), isbn.as_str()));
    println!("Book '{}' added successfully.", title);
}

fn borrow_book(catalog: &mut Catalog) {
    let Some(isbn) = prompt("Enter the ISBN of the book to borrow: ") else { return };
    match catalog.borrow_book(isbn.as_str()) {
        Ok(book) => println!("Book borrowed: {}", book),
        Err(err) => println!("{}", err),
    }
}

fn return_book(catalog: &mut Catalog) {
    let Some(isbn) = prompt("Enter the ISBN of the book to return: ") else { return };
    match catalog.return_book(isbn.as_str()) {
        Ok(book) => println!("Book returned: {}", book),
        Err(err) => println!("{}", err),
    }
}

fn view_books(catalog: &Catalog) {
    println!("Books in the library:");
    if catalog.is_empty() {
        println!("No books in the library.");
        return;
    }
    for book in catalog.books_by_title() {
        println!("{}", book);
    }
}

fn main() {
    setup_tracing();
    info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Configuration::new("library_data.json");
    let repository: Box<dyn CatalogRepository> =
        create_catalog_repository(Path::new(config.data_file.as_str()));
    let mut catalog = repository.load();

    loop {
        println!("{}", MENU);
        let Some(choice) = prompt("Enter choice: ") else {
            // stdin closed, treat as exit with a final best-effort save
            repository.save(&catalog);
            break;
        };
        match choice.as_str() {
            "1" => add_book(&mut catalog),
            "2" => borrow_book(&mut catalog),
            "3" => return_book(&mut catalog),
            "4" => view_books(&catalog),
            "5" => {
                repository.save(&catalog);
                println!("Library data saved successfully.");
            }
            "6" => {
                catalog = repository.load();
                println!("Library data loaded successfully.");
            }
            "7" => {
                repository.save(&catalog);
                println!("Library data saved.");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 7."),
        }
    }
}
