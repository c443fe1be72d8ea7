use sovran_collection::{Collection, CollectionError, Key};

#[derive(Debug, Clone)]
struct Country {
    name: &'static str,
    population_millions: f64,
}

fn main() -> Result<(), CollectionError> {
    let unknown = Country {
        name: "unknown",
        population_millions: 0.0,
    };
    let mut countries = Collection::with_default(unknown);

    // ISO alpha-2, alpha-3 and numeric codes all name the same country
    countries.set(
        vec![Key::from("NO"), Key::from("NOR"), Key::from(578)],
        Country {
            name: "Norway",
            population_millions: 5.5,
        },
    )?;
    countries.set(
        vec![Key::from("JP"), Key::from("JPN"), Key::from(392)],
        Country {
            name: "Japan",
            population_millions: 124.5,
        },
    )?;

    for code in ["NOR", "392", "XX"] {
        let country = countries.get_bound(code)?;
        match country {
            Some(country) => println!("{} -> {}", code, country.name),
            None => println!("{} -> no entry", code),
        }
    }

    // Prefer the last candidate that is bound
    let preferred = countries.get_bound(["JP", "NO"])?;
    println!("Preferred: {:?}", preferred.map(|c| c.name));

    let total: f64 = countries
        .map(|country, _, _| country.population_millions)?
        .iter()
        .sum();
    println!("{} countries, {:.1} million people", countries.size()?, total);

    let all_large = countries.every(|country, _, _| country.population_millions > 10.0)?;
    println!("All above 10 million: {}", all_large);

    // Keep a snapshot before starting over
    let snapshot = countries.clone();
    countries.clear()?;
    println!(
        "After clear: {} entries, snapshot still has {}",
        countries.size()?,
        snapshot.size()?
    );

    countries.copy(&snapshot)?;
    println!("Restored keys: {:?}", countries.keys()?);

    countries.destroy();
    if let Err(e) = countries.size() {
        println!("After destroy: {}", e);
    }

    Ok(())
}
