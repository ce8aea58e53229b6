//! Template bodies for generated projects
//!
//! Literal `%` must be written `%%`; see [`crate::template`].

pub const README: &str = "\
%s ( concise description )

Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor
incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis
nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.
";

pub const README_SHORT: &str = "%s\n";

pub const MAIN_C: &str = "\
#include <stdio.h>

int main(void)
{
\tputs(\"%1$s: Hello %2$s!\");
\treturn 0;
}
";

pub const CLANG_FORMAT: &str = "BasedOnStyle: GNU\n";

pub const HEADER_GUARD: &str = "\
#ifndef %1$s
#define %1$s

#endif /* %1$s */
";

pub const SIMPLE_MAKEFILE: &str = "\
.POSIX:
CC = %3$s
CFLAGS = -Wall -Wextra -Wpedantic

all: %1$s

%1$s: %1$s.%2$s
\t$(CC) $(CFLAGS) -o $@ %1$s.%2$s

clean:
\trm -f %1$s

.PHONY: all clean
";

pub const POSIX_MAKEFILE: &str = "\
prefix = /usr/local

SRCS := $(wildcard src/*.%2$s)
OBJS := $(patsubst src/%%.%2$s,build/obj/%%.o,$(SRCS))
BIN := build/bin/%1$s

-include config.mak

ifeq ($(wildcard config.mak),)
all:
\t@echo \"File config.mak not found, run ./configure\"
\t@exit 1
else

all: $(BIN)

build/obj/%%.o: src/%%.%2$s
\t@mkdir -p build/obj
\t$(CC) $(CFLAGS) -Iinclude -c $< -o $@

$(BIN): $(OBJS)
\t@mkdir -p build/bin
\t$(CC) $(LDFLAGS) $^ -o $@

endif

install: $(BIN)
\tinstall -d $(DESTDIR)$(prefix)/bin
\tinstall -m 755 $(BIN) $(DESTDIR)$(prefix)/bin/%1$s
\tinstall -d $(DESTDIR)$(prefix)/share/man/man1
\tinstall -m 644 man/%1$s.1 $(DESTDIR)$(prefix)/share/man/man1/%1$s.1

uninstall:
\trm -f $(DESTDIR)$(prefix)/bin/%1$s
\trm -f $(DESTDIR)$(prefix)/share/man/man1/%1$s.1

clean:
\trm -rf build

dist-clean: clean
\trm -f config.mak

.PHONY: all clean dist-clean install uninstall
";

pub const CC_CANDIDATES: &str = "trycc gcc\ntrycc cc\ntrycc clang";

pub const CXX_CANDIDATES: &str = "trycc g++\ntrycc CC\ntrycc clang++";

pub const CONFIGURE: &str = "\
#!/bin/sh

usage() {
cat <<EOF
Usage: $0 [OPTION]... [VAR=VALUE]...

To assign environment variables (e.g., CC, CFLAGS...), specify them as
VAR=VALUE.

  CC      C compiler command [detected]
  CFLAGS  C compiler flags [-Wall -Wextra -O2]

EOF
exit 0
}

echo () { printf \"%%s\\n\" \"$*\" ; }
cmdexists () { type \"$1\" >/dev/null 2>&1 ; }
trycc () { test -z \"$CC\" && cmdexists \"$1\" && CC=$1 ; }

prefix=/usr/local
CFLAGS=\"-Wall -Wextra -O2\"
LDFLAGS=
CC=

for arg ; do
case \"$arg\" in
--help|-h) usage ;;
--prefix=*) prefix=${arg#*=} ;;
CC=*) CC=${arg#*=} ;;
CFLAGS=*) CFLAGS=${arg#*=} ;;
LDFLAGS=*) LDFLAGS=${arg#*=} ;;
esac
done

printf \"checking for C compiler... \"
%s
printf \"%%s\\n\" \"$CC\"
test -n \"$CC\" || { echo \"no C compiler found\" ; exit 1 ; }

printf \"checking whether C compiler works... \"
tmpc=\"$(mktemp -d)/test.c\"
echo \"typedef int x;\" > \"$tmpc\"
if output=$($CC $CFLAGS -c -o /dev/null \"$tmpc\" 2>&1) ; then
printf \"yes\\n\"
else
printf \"no; %%s\\n\" \"$output\"
exit 1
fi

printf \"creating config.mak... \"
printf \"PREFIX=%%s\\n\" \"$prefix\" > config.mak
printf \"CFLAGS=%%s\\n\" \"$CFLAGS\" >> config.mak
printf \"LDFLAGS=%%s\\n\" \"$LDFLAGS\" >> config.mak
printf \"CC=%%s\\n\" \"$CC\" >> config.mak
printf \"done\\n\"
";

pub const MAN_PAGE: &str = "\
.\\\" %1$s.1 - Manual page for %1$s
.TH %2$s 1 \"%3$s\" \"0.1\" \"User Commands\"
.SH NAME
%1$s \\- a program that does a thing
.SH SYNOPSIS
.B %1$s
.SH DESCRIPTION
This is a program that does a thing.
.SH AUTHOR
Written by %4$s.
";

pub const WHAT_NEXT: &str = "\
# What next?

## Steps
 - Write a description in the README
 - Write the usage function ( write to stderr )
 - Start writing your program
";

pub const GNU_AUTHORS: &str = "%s\n";

pub const GNU_INSTALL: &str = "\
autoreconf -i
./configure
make
make install
";

pub const GNU_NEWS: &str = "\
%s (0.1) unstable; urgency=low

  * Initial release. It compiles!
   - Nothing else.
";

pub const GNU_README: &str = "\
This is the README file for the %1$s distribution.
%1$s does a thing.
";

pub const CONFIGURE_AC: &str = "\
AC_INIT([%1$s], [0.1], [%2$s])
AM_INIT_AUTOMAKE([-Wall -Werror foreign])
%3$s
AC_CONFIG_FILES([Makefile src/Makefile man/Makefile])
AC_OUTPUT
";

pub const LIBRARY_SOURCE: &str = "#include \"%s.h\"\n";

pub const LIBRARY_MAKEFILE: &str = "\
CC = %3$s
CFLAGS = -Wall -Wextra -O2 -fPIC -Iinclude
AR = ar rcs
BUILD = build

SRC = $(wildcard src/*.%2$s)
OBJ = $(SRC:src/%%.%2$s=$(BUILD)/obj/%%.o)

STATIC = $(BUILD)/lib%1$s.a
SHARED = $(BUILD)/lib%1$s.so

all: $(STATIC) $(SHARED)

$(STATIC): $(OBJ)
\t$(AR) $@ $^

$(SHARED): $(OBJ)
\t$(CC) -shared -o $@ $^

$(BUILD)/obj/%%.o: src/%%.%2$s | $(BUILD)
\t$(CC) $(CFLAGS) -c $< -o $@

$(BUILD):
\tmkdir -p $(BUILD)/obj

clean:
\t$(RM) -r $(BUILD)

.PHONY: all clean
";

pub const FASM_TXT: &str = "<https://github.com/tgrysztar/fasm/blob/master/FASM.TXT>\n";

pub const FASM_MAIN_C: &str = "\
#include <stdio.h>

int main(void)
{
\tputs(\"Who's that behind you?\");
\treturn 0;
}
";

pub const FASM_BUILD: &str = "\
#!/bin/sh

%3$s SOURCE/main.%2$s -o %1$s
";

pub const SHELL_SCRIPT: &str = "\
#!/bin/sh

# Usage: $0 [options]...

prog_name=$(basename \"$0\")
tool_version=\"beta\"
year=%d

fatal() {
\techo \"fatal: $*\" >&2
\texit 1
}

run() {
\t\"$@\" || fatal \"could not run: $*\"
}

print_help() {
\tcat <<EOF
Usage: $prog_name [options]...

      --help     print this help and exit.
      --version  print version information.
EOF
}

print_version() {
\tcat <<EOF
$prog_name $tool_version
Copyright (C) $year %s.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.
EOF
}

while [ $# -gt 0 ]; do
\tcase \"$1\" in
\t--help) print_help; exit 0 ;;
\t--version) print_version; exit 0 ;;
\t*) fatal \"Not implemented yet\" ;;
\tesac
\tshift
done
";

pub const CMAKE_LISTS: &str = "\
cmake_minimum_required(VERSION 3.16)
project(%1$s VERSION 0.1 LANGUAGES %2$s)

add_executable(%1$s src/main.%3$s)
install(TARGETS %1$s)
";

pub const FORMAT_TOOL: &str = "\
#!/bin/sh

# Usage: ./tools/format

find . -name \"*.%s\" -exec clang-format -i --verbose {} \\;
find . -name \"*.h\" -exec clang-format -i --verbose {} \\;
";

pub const CLEANUP_TOOL: &str = "\
#!/bin/sh
# Usage: ./tools/Cleanup

fatal() {
\techo \"fatal: $*\" >&2
\texit 1
}

run() {
\t\"$@\" || fatal \"could not run: $*\"
}

[ -d ./tools ] || fatal \"must be run from the project root\"

[ -x ./tools/format ] && run sh ./tools/format
run rm -rf .cache build
run rm -f compile_commands.json config.mak

echo \"done.\"
";
