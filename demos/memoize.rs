use sovran_collection::{Collection, CollectionError};

// A normalized path resolves to the same file however it was spelled
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    format!("/{}", parts.join("/"))
}

struct Resolver {
    cache: Collection<String>,
    computed: usize,
}

impl Resolver {
    fn new() -> Self {
        Self {
            cache: Collection::new(),
            computed: 0,
        }
    }

    fn resolve(&mut self, path: &str) -> Result<String, CollectionError> {
        if let Some(resolved) = self.cache.get(path)? {
            return Ok(resolved.clone());
        }

        let resolved = normalize(path);
        self.computed += 1;

        // Cache under both the spelling we were asked for and the normalized form
        self.cache.set([path, resolved.as_str()], resolved.clone())?;
        Ok(resolved)
    }
}

fn main() -> Result<(), CollectionError> {
    let mut resolver = Resolver::new();

    let inputs = [
        "/usr/local/../lib/./rust",
        "/usr/lib/rust",
        "/usr/local/../lib/./rust",
        "//usr/lib//rust/",
    ];

    for input in inputs {
        println!("{:<28} -> {}", input, resolver.resolve(input)?);
    }

    println!();
    println!("Computed {} times for {} lookups", resolver.computed, inputs.len());
    println!(
        "Cache holds {} values under {} keys",
        resolver.cache.size()?,
        resolver.cache.keys()?.len()
    );

    for key in resolver.cache.keys()? {
        println!("  {} (slot {:?})", key, resolver.cache.index_of(&key)?);
    }

    Ok(())
}
