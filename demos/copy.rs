use argslot::derive::Coercible;
use argslot::{all_assigned, assign_first_unassigned, is_option_like, ArgError, Cursor, Radix, Slot};

#[derive(Debug, Clone, Copy, Coercible)]
#[repr(u8)]
enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Loud = 2,
}

struct Parameters {
    source: Slot<String>,
    destination: Slot<String>,
    block_size: Slot<u32>,
    mode: Slot<u32>,
    verbosity: Slot<Verbosity>,
}

fn parse(tokens: &[String]) -> Result<Parameters, ArgError> {
    let mut parameters = Parameters {
        source: Slot::new(),
        destination: Slot::new(),
        block_size: Slot::new(),
        mode: Slot::new(),
        verbosity: Slot::new(),
    };
    let mut cursor = Cursor::new(tokens)?;

    while let Some(token) = cursor.next_token() {
        match token {
            "-b" | "--block-size" => parameters.block_size.fetch(&mut cursor)?,
            "-m" | "--mode" => parameters
                .mode
                .assign(cursor.fetch_radix::<u32>(Radix::OCTAL)?),
            "-v" | "--verbosity" => parameters.verbosity.fetch(&mut cursor)?,
            _ if is_option_like(token) => return Err(ArgError::unsupported(token)),
            _ => {
                let assigned = assign_first_unassigned!(token => parameters.source, parameters.destination)?;

                if !assigned {
                    return Err(ArgError::excess(token));
                }
            }
        }
    }

    if !all_assigned!(parameters.source, parameters.destination) {
        return Err(ArgError::NotEnoughArguments);
    }

    Ok(parameters)
}

fn main() {
    let tokens: Vec<String> = std::env::args().collect();

    match parse(&tokens) {
        Ok(parameters) => {
            let verbosity = parameters
                .verbosity
                .get()
                .copied()
                .unwrap_or(Verbosity::Normal);
            let block_size = parameters.block_size.get().copied().unwrap_or(4096);

            if !matches!(verbosity, Verbosity::Quiet) {
                println!(
                    "copy {} -> {} (block size: {block_size}, mode: {:?}, verbosity: {verbosity:?})",
                    parameters.source.get().map(String::as_str).unwrap_or_default(),
                    parameters.destination.get().map(String::as_str).unwrap_or_default(),
                    parameters.mode.get().ok().map(|mode| format!("{mode:o}")),
                );
            }

            if matches!(verbosity, Verbosity::Loud) {
                println!("(not actually copying anything)");
            }
        }
        Err(error) => {
            eprintln!("Parse error: {error}");
            std::process::exit(1);
        }
    }
}
